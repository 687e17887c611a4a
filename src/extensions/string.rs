pub const LOOPBACK_ADDR: &str = "127.0.0.1";

pub trait ToLoopbackHost {
    /// Returns `127.0.0.1` when the value is `localhost` in any letter case,
    /// otherwise the value unchanged.
    fn to_loopback_host(&self) -> String;
}

impl ToLoopbackHost for str {
    fn to_loopback_host(&self) -> String {
        if self.eq_ignore_ascii_case("localhost") {
            LOOPBACK_ADDR.to_string()
        } else {
            self.to_string()
        }
    }
}

impl ToLoopbackHost for String {
    fn to_loopback_host(&self) -> String {
        self.as_str().to_loopback_host()
    }
}
