use hv_ident::Hypervisor;

use clap::Parser;
use std::error::Error;

#[derive(Parser)]
#[command(version, about = "Print human-readable names for hypervisor identifiers")]
struct Args {
    /// numeric identifier or label, e.g. "2" or "Hyper-V"
    #[arg(required_unless_present = "list")]
    ids: Vec<String>,

    /// print the full identifier table
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for hv in Hypervisor::ALL.iter() {
            println!("{}\t{}", hv.id(), hv.name());
        }
        return Ok(());
    }

    for arg in &args.ids {
        let hv = resolve_arg(arg)?;
        println!("{}\t{}", hv.id(), hv.name());
    }

    Ok(())
}

// A numeric identifier always resolves, unassigned values included (those
// get the "unknown" label).  Only a name lookup can fail.
fn resolve_arg(arg: &str) -> Result<Hypervisor, Box<dyn Error>> {
    if let Ok(id) = arg.parse::<u32>() {
        let hv = Hypervisor::from_id(id);
        log::debug!("id {id} resolves to {hv}");
        return Ok(hv);
    }
    match arg.parse::<Hypervisor>() {
        Ok(hv) => Ok(hv),
        Err(err) => {
            log::error!("could not resolve hypervisor name, {err}");
            Err(err.into())
        }
    }
}
