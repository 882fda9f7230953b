use std::io::Write;

use rand::Rng;
use rand_distr::{Beta, Distribution, Gamma, Uniform};
use serde::Serialize;
use thiserror::Error;

const BRIGHTNESS_SHAPE: f64 = 2.0;
const BRIGHTNESS_SCALE: f64 = 3.0;
const AGE_ALPHA: f64 = 3.0;
const AGE_BETA: f64 = 5.0;

#[derive(Error, Debug)]
pub enum StarError {
    #[error("invalid {name} distribution: {reason}")]
    Distribution { name: &'static str, reason: String },

    #[error("failed to serialize star records")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write star records")]
    Write(#[from] std::io::Error),
}

/// A synthetic star. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StarRecord {
    pub theta: f64,
    pub phi: f64,
    pub brightness: f64,
    pub age: f64,
}

/// Holds the four per-star distributions so they are validated once rather
/// than on every sample.
#[derive(Clone, Debug)]
pub struct StarSynthesizer {
    theta: Uniform<f64>,
    cos_phi: Uniform<f64>,
    brightness: Gamma<f64>,
    age: Beta<f64>,
}

impl StarSynthesizer {
    pub fn new() -> Result<Self, StarError> {
        Ok(Self {
            theta: Uniform::new(0.0, 360.0).map_err(|e| invalid("theta", e))?,
            cos_phi: Uniform::new_inclusive(-1.0, 1.0).map_err(|e| invalid("phi", e))?,
            brightness: Gamma::new(BRIGHTNESS_SHAPE, BRIGHTNESS_SCALE)
                .map_err(|e| invalid("gamma", e))?,
            age: Beta::new(AGE_ALPHA, AGE_BETA).map_err(|e| invalid("beta", e))?,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> StarRecord {
        let theta = self.theta.sample(rng);
        // acos of a uniform cosine spreads points evenly over the sphere;
        // a uniform phi would bunch them at the poles
        let phi = self.cos_phi.sample(rng).acos().to_degrees();
        let brightness = self.brightness.sample(rng);
        let age = self.age.sample(rng);
        StarRecord {
            theta,
            phi,
            brightness,
            age,
        }
    }
}

fn invalid(name: &'static str, err: impl std::fmt::Display) -> StarError {
    StarError::Distribution {
        name,
        reason: err.to_string(),
    }
}

pub fn generate_stars<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<StarRecord>, StarError> {
    let synth = StarSynthesizer::new()?;
    Ok((0..count).map(|_| synth.sample(rng)).collect())
}

/// Sample and print one record at a time as a JSON object followed by ` ,`.
/// Nothing is held beyond the record being written.
pub fn stream_stars<R: Rng + ?Sized, W: Write>(
    count: usize,
    rng: &mut R,
    mut out: W,
) -> Result<(), StarError> {
    let synth = StarSynthesizer::new()?;
    for _ in 0..count {
        serde_json::to_writer(&mut out, &synth.sample(rng))?;
        writeln!(out, " ,")?;
    }
    out.flush()?;
    Ok(())
}

/// Write the whole collection as a single JSON array.
pub fn write_document<W: Write>(
    records: &[StarRecord],
    pretty: bool,
    out: W,
) -> Result<(), StarError> {
    write_json(records, pretty, out)
}

#[derive(Serialize)]
struct SkyDocument<'a> {
    stars: SkyStars<'a>,
}

#[derive(Serialize)]
struct SkyStars<'a> {
    brightness_scale: f64,
    data: &'a [StarRecord],
}

/// Write the collection in the layout the sky renderer loads:
/// `{"stars": {"brightness_scale": .., "data": [..]}}`.
pub fn write_sky_document<W: Write>(
    records: &[StarRecord],
    brightness_scale: f64,
    pretty: bool,
    out: W,
) -> Result<(), StarError> {
    let doc = SkyDocument {
        stars: SkyStars {
            brightness_scale,
            data: records,
        },
    };
    write_json(&doc, pretty, out)
}

fn write_json<T: Serialize + ?Sized, W: Write>(
    value: &T,
    pretty: bool,
    mut out: W,
) -> Result<(), StarError> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
