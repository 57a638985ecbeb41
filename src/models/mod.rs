pub mod kind;
pub mod records;
pub mod scan;
pub mod symbology;

pub use kind::PayloadKind;
pub use records::{ContactRecord, GeoRecord, MailRecord, SmsRecord, WifiRecord};
pub use scan::ScanResult;
pub use symbology::Symbology;
