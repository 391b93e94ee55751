pub(crate) mod clock;
pub(crate) mod controller;
pub(crate) mod state;
