use std::path::PathBuf;

use clap::Parser;
use stack::synth::write_assembly;
use stack::{topologies, StackName};

#[derive(Parser, Debug)]
#[command(name = "stack")]
#[command(about = "Synthesize the prod and stage people API stacks")]
struct Args {
    /// Directory the templates are written to
    #[arg(long, default_value = "cdk.out")]
    out_dir: PathBuf,

    /// Region both stacks are deployed to
    #[arg(long, default_value = "eu-west-1")]
    region: String,

    /// Synthesize a single stack instead of both
    #[arg(long, value_enum)]
    only: Option<StackName>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let topologies = topologies(&args.region, args.only);

    for topology in &topologies {
        println!(
            "{}: table {} ({} RCU), api {}, {} functions capped at {}",
            topology.stack_name,
            topology.table.name,
            topology.table.read_capacity,
            topology.api.name,
            topology.functions.len(),
            topology.profile.concurrency_limit
        );
    }

    let written = write_assembly(&args.out_dir, &topologies)?;
    for path in written {
        println!("  wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_cover_both_stacks_in_eu_west_1() {
        let args = Args::parse_from(["stack"]);

        assert_eq!(args.region, "eu-west-1");
        assert_eq!(args.out_dir, PathBuf::from("cdk.out"));
        assert_eq!(args.only, None);
    }

    #[test]
    fn only_flag_selects_one_stack() {
        let args = Args::parse_from(["stack", "--only", "stage"]);
        assert_eq!(args.only, Some(StackName::Stage));
    }
}
