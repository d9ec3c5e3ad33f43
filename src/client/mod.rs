//! Client application views.

pub mod acompanhamento {
    pub use crate::acompanhamento::*;
}

pub mod api_client {
    pub use crate::api_client::*;
}

pub mod dashboard {
    pub use crate::dashboard::*;
}

pub mod entrada {
    pub use crate::entrada::*;
}

pub mod parceiros {
    pub use crate::parceiros::*;
}
