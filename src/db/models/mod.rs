//! Database Models

// Serde helpers
pub mod serde_helpers;

// Venue
pub mod restaurant;
pub mod section;
pub mod dining_table;

// Guests
pub mod party;
pub mod reservation;
pub mod waiting_list;

// Staff
pub mod server;

// Seating
pub mod assignment;

// Re-exports
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantUpdate};
pub use section::{Section, SectionCreate, SectionUpdate};
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};
pub use party::{Party, PartyCreate, PartyStatus, PartyUpdate};
pub use reservation::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
pub use waiting_list::{WaitingEntry, WaitingEntryCreate, WaitingEntryUpdate, WaitingStatus};
pub use server::{Server, ServerCreate, ServerUpdate};
pub use assignment::{
    AssignmentStatus, ReservationAssignment, ReservationAssignmentCreate,
    ReservationAssignmentFilter, ReservationAssignmentUpdate, TableAssignment,
    TableAssignmentCreate, TableAssignmentFilter, TableAssignmentUpdate,
};
