use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;

    /// A flow with nothing left to ask is not rendered again.
    fn is_finished(&self) -> bool {
        false
    }

    /// Input the flow treats as a real answer even though it is also a
    /// global keyword such as `exit`.
    fn claims(&self, _input: &str) -> bool {
        false
    }
}
