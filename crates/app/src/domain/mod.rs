pub mod enrollment;
pub mod gate;
pub mod identities;
pub mod visitors;
