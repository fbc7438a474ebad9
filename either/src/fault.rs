use std::any::Any;
use std::error::Error;
use std::fmt;

/// Misuse of an `Either`, kept apart from a represented `Left`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fault {
    LeftValue,
    Panicked(Panic),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::LeftValue => f.write_str("called `Either::get()` on a `Left` value"),
            Fault::Panicked(panic) => write!(f, "panicked: {}", panic),
        }
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Fault::LeftValue => None,
            Fault::Panicked(panic) => Some(panic),
        }
    }
}

impl From<Panic> for Fault {
    #[inline]
    fn from(panic: Panic) -> Self {
        Fault::Panicked(panic)
    }
}

/// A panic captured by [`try_fn`](crate::try_fn).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panic {
    message: String,
}

impl Panic {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_owned(),
                None => "Box<dyn Any>".to_owned(),
            },
        };
        Self { message }
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Panic {}
