//! Built-in document types
//!
//! Representative replicas of the form families this repository carries:
//! room bookings, invoice intake, KYC packs, inspection checklists. Each is
//! one schema definition; the engine does the rest.

mod inspection;
mod invoice;
mod kyc_pack;
mod meeting_room;

pub use inspection::site_inspection_checklist;
pub use invoice::invoice_intake;
pub use kyc_pack::kyc_client_pack;
pub use meeting_room::meeting_room_booking;
