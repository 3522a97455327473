use std::ops::Deref;

use self::definition::AbstractDatabase;

pub mod definition;

mod dummy;
pub use dummy::DummyDb;

#[derive(Clone)]
pub enum Database {
    Dummy(DummyDb),
}

impl Default for Database {
    fn default() -> Self {
        Self::Dummy(Default::default())
    }
}

impl Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match self {
            Database::Dummy(dummy) => dummy,
        }
    }
}
