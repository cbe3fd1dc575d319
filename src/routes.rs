// Route path constants - single source of truth for all fixture paths

pub const HELLO_WORLD: &str = "/hello_world";
pub const HELLO_PERSON: &str = "/hello/{name}";
pub const ECHO: &str = "/echo/{content}";
