pub mod echo;
pub mod hello;
pub mod hello_world;

pub use echo::echo_handler;
pub use hello::hello_person_handler;
pub use hello_world::hello_world_handler;
