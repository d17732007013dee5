mod configurator;
mod notice;

#[doc(inline)]
pub use configurator::Configurator;
#[doc(inline)]
pub use configurator::ConfiguratorError;
#[doc(inline)]
pub use configurator::MAX_SAW_ROTATION;
#[doc(inline)]
pub use configurator::SawPose;
#[doc(inline)]
pub use notice::Notice;
