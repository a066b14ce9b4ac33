use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rotor::geometry::rand::{draw_points, Bounds2, ReplayToken};
use rotor::geometry::{CurveCfg, Point2D, Side};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod catalog;
mod provenance;

use catalog::CurveName;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "rotor-cli")]
#[command(about = "Evaluate and sample implicit planar curves")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate a named curve at one point
    Eval {
        #[arg(long, value_enum)]
        curve: CurveName,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Circle radius
        #[arg(long, default_value_t = 1.0)]
        radius: f32,
        /// On-curve tolerance
        #[arg(long, default_value_t = CurveCfg::default().eps_on)]
        eps: f32,
    },
    /// Classify random points of a box and write them as JSON
    Sample {
        #[arg(long, value_enum)]
        curve: CurveName,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1.0)]
        radius: f32,
        #[arg(long, default_value_t = CurveCfg::default().eps_on)]
        eps: f32,
        /// Box as x_min,x_max,y_min,y_max
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [0.0f32, 1.0, 0.0, 1.0])]
        bounds: Vec<f32>,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct Evaluation {
    x: f32,
    y: f32,
    value: f32,
    side: &'static str,
}

impl Evaluation {
    fn new(p: Point2D, value: f32, eps_on: f32) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            value,
            side: Side::of_value(value, eps_on).as_str(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Eval {
            curve,
            x,
            y,
            radius,
            eps,
        } => {
            let ev = eval(curve, x, y, radius, eps)?;
            println!("{}", serde_json::to_string_pretty(&ev)?);
            Ok(())
        }
        Action::Sample {
            curve,
            count,
            seed,
            radius,
            eps,
            bounds,
            out,
        } => sample(curve, count, seed, radius, eps, &bounds, &out).map(|_| ()),
        Action::Report => report(),
    }
}

fn check_eps(eps: f32) -> Result<CurveCfg> {
    if eps.is_nan() || eps < 0.0 {
        bail!("--eps must be a non-negative number, got {eps}");
    }
    Ok(CurveCfg { eps_on: eps })
}

fn eval(curve: CurveName, x: f64, y: f64, radius: f32, eps: f32) -> Result<Evaluation> {
    let cfg = check_eps(eps)?;
    let p = Point2D::new(x, y);
    let value = curve.build(radius).eval(p);
    let ev = Evaluation::new(p, value, cfg.eps_on);
    tracing::info!(curve = curve.as_str(), point = %p, value, side = ev.side, "eval");
    Ok(ev)
}

fn sample(
    curve: CurveName,
    count: usize,
    seed: u64,
    radius: f32,
    eps: f32,
    bounds: &[f32],
    out: &str,
) -> Result<Vec<Evaluation>> {
    let cfg = check_eps(eps)?;
    let &[x_min, x_max, y_min, y_max] = bounds else {
        bail!("--bounds needs 4 values, got {}", bounds.len());
    };
    let bounds = Bounds2::new(x_min, x_max, y_min, y_max);
    tracing::info!(curve = curve.as_str(), count, seed, ?bounds, out, "sample");

    let c = curve.build(radius);
    let pts = draw_points(bounds, count, ReplayToken::new(seed, 0))?;
    let rows: Vec<Evaluation> = pts
        .into_iter()
        .map(|p| Evaluation::new(p, c.eval(p), cfg.eps_on))
        .collect();
    let inside = rows.iter().filter(|r| r.side == Side::Inside.as_str()).count();
    tracing::info!(rows = rows.len(), inside, "sample_classified");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = Payload::new(
        "sample",
        json!({
            "count": count,
            "seed": seed,
            "radius": radius,
            "eps_on": cfg.eps_on,
            "bounds": [x_min, x_max, y_min, y_max]
        }),
    )
    .with_curve(curve.as_str());
    let prov = provenance::write_sidecar(out_path, &payload)?;
    tracing::info!(provenance = %prov.display(), "sample_written");
    Ok(rows)
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
