pub mod question_flow;
