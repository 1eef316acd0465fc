pub mod options;
pub mod record;

pub use options::{
    Diagnosis, Diet, FamilyHistory, Lifestyle, Menstruation, Ovulation, SexFrequency, Sleep,
    Stress, Substance,
};
pub use record::{
    clamp_to, InputRecord, AGE_RANGE, HEIGHT_RANGE, MARRIAGE_YEARS_RANGE, WEIGHT_RANGE,
};
