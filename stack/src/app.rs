//! The deployment units synthesized from one invocation of the stack tool.

use clap::ValueEnum;

use crate::profile::Profile;
use crate::topology::Topology;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StackName {
    Prod,
    Stage,
}

impl StackName {
    pub const ALL: [StackName; 2] = [StackName::Prod, StackName::Stage];

    pub fn as_str(&self) -> &'static str {
        match self {
            StackName::Prod => "prod",
            StackName::Stage => "stage",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, StackName::Prod)
    }
}

/// Both stacks by default, or just `only`.
pub fn topologies(region: &str, only: Option<StackName>) -> Vec<Topology> {
    let stacks = match only {
        Some(stack) => vec![stack],
        None => StackName::ALL.to_vec(),
    };

    stacks
        .into_iter()
        .map(|stack| {
            Topology::build(
                stack.as_str(),
                region,
                Profile::select(stack.is_production()),
            )
        })
        .collect()
}
