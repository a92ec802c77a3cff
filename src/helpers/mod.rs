mod args;
mod input;
mod load_dotenv;

pub use args::reject_unused;
pub use input::read_payload;
pub use load_dotenv::load_dotenv;
