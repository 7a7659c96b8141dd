use chrono::Local;

use crate::{
    cli::{BurrowArgs, BurrowCommand},
    prelude::*,
    store::RateStore,
    tables::build_rates_table,
};

#[instrument(skip_all)]
pub fn burrow(args: BurrowArgs) -> Result {
    match args.command {
        BurrowCommand::Rates(args) => {
            let store = RateStore::read_from(&args.store.path)?;
            println!("{}", build_rates_table(&store.points(), Local::now(), args.price_unit));
        }
        BurrowCommand::Prune(args) => {
            let mut store = RateStore::read_from(&args.path)?;
            store.prune(args.prune_before(Local::now()));
            store.write_to(&args.path)?;
        }
    }
    Ok(())
}
