pub mod random;
pub mod subject_observer;
