mod mock_transport;
mod openai_client;

pub use mock_transport::*;
pub use openai_client::*;
