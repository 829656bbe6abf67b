/// Failures raised by the counting algorithms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    #[error("input has {actual} elements, at least {required} are required")]
    TooFewElements { required: usize, actual: usize },
}
