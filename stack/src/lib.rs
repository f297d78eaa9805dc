//! Build-time description of the people API deployment.
//!
//! [`profile`] picks the per-environment constants, [`topology`] turns them
//! into an explicit resource structure and [`synth`] renders that structure as
//! CloudFormation templates for the deployment tooling.

pub mod app;
pub mod profile;
pub mod synth;
pub mod topology;

pub use app::{topologies, StackName};
pub use profile::Profile;
pub use topology::Topology;
