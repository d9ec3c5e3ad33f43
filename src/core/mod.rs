// Domain-layer modules and shared errors/models
pub mod errors {
    pub use crate::errors::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod policy {
    pub use crate::policy::*;
}

pub mod store {
    pub use crate::store::*;
}
