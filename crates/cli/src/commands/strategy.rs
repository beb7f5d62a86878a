//! Strategy demo: phí ship theo hãng vận chuyển

use anyhow::Result;
use clap::{Args, ValueEnum};
use patterns_core::strategy::{Order, Shipper, ShippingCost};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShipperArg {
    Fedex,
    Postal,
    Ups,
}

impl From<ShipperArg> for Shipper {
    fn from(arg: ShipperArg) -> Self {
        match arg {
            ShipperArg::Fedex => Shipper::FedEx,
            ShipperArg::Postal => Shipper::Postal,
            ShipperArg::Ups => Shipper::Ups,
        }
    }
}

#[derive(Args, Debug)]
pub struct StrategyArgs {
    /// Strategy to use; all strategies are shown when omitted
    #[arg(long, value_enum)]
    pub shipper: Option<ShipperArg>,

    /// Shipper label stored on the order
    #[arg(long, default_value = "missing")]
    pub order_shipper: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CostLine<'a> {
    strategy: &'a str,
    order: &'a Order,
    cost: f64,
}

pub fn handle(args: StrategyArgs) -> Result<()> {
    let shippers = match args.shipper {
        Some(shipper) => vec![Shipper::from(shipper)],
        None => {
            log::info!("No shipper selected, showing every strategy");
            Shipper::ALL.to_vec()
        }
    };

    let order = Order::new(args.order_shipper);

    for shipper in shippers {
        let calculator = ShippingCost::for_shipper(shipper);
        let line = CostLine {
            strategy: calculator.strategy_name(),
            order: &order,
            cost: calculator.shipping_cost(&order),
        };

        if args.json {
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!("🚚 {:<7} {:.2}", line.strategy, line.cost);
        }
    }

    Ok(())
}
