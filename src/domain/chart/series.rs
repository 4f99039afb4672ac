/// Maximum points the live append path keeps on screen.
pub const LIVE_POINT_CAP: usize = 50;

/// Maximum points a wholesale history reload installs.
pub const RELOAD_POINT_CAP: usize = 100;

/// Domain entity - the line-chart data: paired (time label, price) sequences.
///
/// Invariant: `labels.len() == prices.len()` after every mutation, and the
/// length never exceeds the relevant cap. Eviction is FIFO and always paired -
/// one element from the front of both sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    labels: Vec<String>,
    prices: Vec<f64>,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one live point. When the result exceeds [`LIVE_POINT_CAP`],
    /// exactly one element is removed from the front of both sequences.
    pub fn push_point(&mut self, label: String, price: f64) {
        self.labels.push(label);
        self.prices.push(price);

        if self.labels.len() > LIVE_POINT_CAP {
            self.labels.remove(0);
            self.prices.remove(0);
        }
    }

    /// Replace both sequences wholesale from a history reload, in input order.
    pub fn replace(&mut self, points: Vec<(String, f64)>) {
        let mut points = points;
        points.truncate(RELOAD_POINT_CAP);

        self.labels.clear();
        self.prices.clear();
        for (label, price) in points {
            self.labels.push(label);
            self.prices.push(price);
        }
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.prices.clear();
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Min/max of the price sequence, for vertical scaling.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.prices.is_empty() {
            return None;
        }

        let mut min = self.prices[0];
        let mut max = self.prices[0];
        for &price in &self.prices {
            if price < min {
                min = price;
            }
            if price > max {
                max = price;
            }
        }

        Some((min, max))
    }
}
