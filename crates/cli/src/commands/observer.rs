//! Observer demo: KPI dashboard

use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use patterns_core::observer::{CurrentKpis, ForecastKpis, KpiSnapshot, Kpis, Observer};

/// In observer ra stdout mỗi khi nó nhận update
struct Printed<O>(Rc<O>);

impl<O> Observer<KpiSnapshot> for Printed<O>
where
    O: Observer<KpiSnapshot> + fmt::Display,
{
    fn update(&self, state: &KpiSnapshot) {
        self.0.update(state);
        println!("{}\n", self.0);
    }
}

pub fn handle() -> Result<()> {
    let kpis = Kpis::new();
    let current = Rc::new(CurrentKpis::new());
    let forecast = Rc::new(ForecastKpis::new());

    {
        let _current = kpis.subscribe(Rc::new(Printed(current.clone())));
        let _forecast = kpis.subscribe(Rc::new(Printed(forecast.clone())));

        kpis.set_kpis(25, 10, 5);
        kpis.set_kpis(250, 110, 50);
        kpis.set_kpis(22, 32, 63);
    }

    println!("\nExited subscription scope\n");
    kpis.set_kpis(150, 110, 120);

    println!("Subject state: {}", serde_json::to_string(&kpis.snapshot())?);
    println!("Current observer still holds: {}", serde_json::to_string(&current.state())?);
    println!("Forecast observer still holds: {}", serde_json::to_string(&forecast.state())?);
    Ok(())
}
