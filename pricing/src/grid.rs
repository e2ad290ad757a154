use ndarray::Array2;

use crate::analytic::{BlackScholesMerton, OptionPrice};
use crate::common::models::OptionParameters;

/// Evenly spaced parameter values over a closed interval, e.g. the asset-price
/// or volatility axis of a sensitivity heatmap.
pub struct GridRange {
    pub min: f64,
    pub max: f64,
    pub nr_points: usize,
}

impl GridRange {
    pub fn new(min: f64, max: f64, nr_points: usize) -> Self {
        Self {
            min,
            max,
            nr_points,
        }
    }

    pub fn values(&self) -> Vec<f64> {
        if self.nr_points <= 1 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (self.nr_points - 1) as f64;
        (0..self.nr_points)
            .map(|i| self.min + i as f64 * step)
            .collect()
    }
}

/// Call and put prices evaluated over an asset-price x volatility grid.
/// Each cell is an independent scenario derived from the base parameters;
/// rows follow the asset-price axis, columns the volatility axis.
pub struct PriceSurface {
    asset_prices: GridRange,
    volas: GridRange,
}

impl PriceSurface {
    pub fn new(asset_prices: GridRange, volas: GridRange) -> Self {
        Self {
            asset_prices,
            volas,
        }
    }

    pub fn evaluate(
        &self,
        base: &OptionParameters,
        price_fn: impl Fn(&OptionParameters) -> f64,
    ) -> Array2<f64> {
        let asset_prices = self.asset_prices.values();
        let volas = self.volas.values();

        Array2::from_shape_fn((asset_prices.len(), volas.len()), |(i, j)| {
            price_fn(&base.with_asset_price(asset_prices[i]).with_vola(volas[j]))
        })
    }

    pub fn call_prices(&self, base: &OptionParameters) -> Array2<f64> {
        self.evaluate(base, BlackScholesMerton::call)
    }

    pub fn put_prices(&self, base: &OptionParameters) -> Array2<f64> {
        self.evaluate(base, BlackScholesMerton::put)
    }
}
