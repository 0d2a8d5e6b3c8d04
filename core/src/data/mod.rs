//! Dataset model: entities, membership and the ordered map beneath them

pub mod dataset;
pub mod membership;
pub mod ordered;

pub use self::dataset::{Dataset, Entity};
pub use self::membership::{Members, MembershipMap};
pub use self::ordered::OrderedMap;
