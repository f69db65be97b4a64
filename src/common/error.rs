use thiserror::Error;

#[derive(Debug, Error)]
pub enum CowError {
    /// The blocking delay was cut short by an interrupt signal. The busy flag
    /// has already been reset when this surfaces.
    #[error("cow {name} was interrupted while {activity}!")]
    Interrupted { name: String, activity: &'static str },
}
