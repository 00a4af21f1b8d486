mod collections;
pub use collections::{NftCollection, TokenContractRef};

mod networks;
pub use networks::{KnownNetworks, ParseNetworkError};

mod payments;
pub use payments::{PaymentRecord, PaymentRecords};
