/// Name used when the caller does not give one.
pub const DEFAULT_NAME: &str = "World";

pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
