use micro_decorator::{BindError, CallArgs, Decorator, FieldSink, Signature, constructor};
use serde_json::{Map, Value};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Default)]
struct Point {
    x: f64,
    y: f64,
    norm: f64,
}

impl FieldSink for Point {
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), BindError> {
        let number = value.as_f64().ok_or_else(|| BindError::invalid_field(name, "expected a number"))?;
        match name {
            "x" => self.x = number,
            "y" => self.y = number,
            _ => return Err(BindError::invalid_field(name, "no such field")),
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let signature = Signature::builder().param("x").param_with_default("y", 0.0).build()?;
    let point_init = constructor(signature).decorate(|p: &mut Point, _: &CallArgs| {
        p.norm = p.x.hypot(p.y);
        Ok::<_, BindError>(())
    });

    let p: Point = point_init.construct(CallArgs::new().arg(3.0).kwarg("y", 4.0))?;
    info!(x = p.x, y = p.y, norm = p.norm, "constructed");

    let origin_x: Point = point_init.construct(CallArgs::new().arg(5))?;
    info!(x = origin_x.x, y = origin_x.y, "constructed with default y");

    if let Err(e) = point_init.construct::<Point, (), BindError>(CallArgs::new().arg(1).kwarg("z", 2)) {
        warn!(cause = %e, "rejected");
    }

    // a dynamic object, including the variadic collectors
    let signature = Signature::builder().param("name").var_positional("tags").var_keyword("labels").build()?;
    let record_init = constructor(signature).decorate(|_: &mut Map<String, Value>, _: &CallArgs| Ok::<_, BindError>(()));
    let record: Map<String, Value> =
        record_init.construct(CallArgs::new().arg("web").arg("prod").arg("eu").kwarg("team", "edge"))?;
    let record = Value::Object(record);
    info!(%record, "constructed record");

    Ok(())
}
