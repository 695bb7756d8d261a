pub mod mcculloch_pitts;
pub mod gates;

pub use mcculloch_pitts::McCullochPitts;
pub use gates::Gate;
