pub mod address;
pub mod graph;
pub mod interaction;

pub use address::is_valid_address;
pub use address::WalletAddress;
pub use address::WalletSet;
pub use graph::GraphExport;
pub use graph::InteractionEdge;
pub use graph::InteractionGraph;
pub use graph::WalletNode;
pub use interaction::Interaction;
