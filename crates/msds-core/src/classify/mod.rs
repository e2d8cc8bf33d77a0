pub mod attachments;
pub mod description;
pub mod hazard;
pub mod regulation;

pub use attachments::{attachments_of, attachments_with_code, partition, AttachmentBuckets};
pub use description::{describe, describe_tagged, Domain};
pub use hazard::WarningCategory;
pub use regulation::{derive_regulations, regulations_for, Regulation, RegulationSet};
