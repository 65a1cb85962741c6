//! Statistics result types

/// Mean and population standard deviation of a set of intensities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl IntensityStats {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Statistics of an empty sample
    pub fn undefined() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    pub fn as_pair(&self) -> (f64, f64) {
        (self.mean, self.std_dev)
    }
}

/// Label of the channel at zero-based `index` (`Channel_1`, `Channel_2`, ...)
pub fn channel_label(index: usize) -> String {
    format!("Channel_{}", index + 1)
}

/// Per-channel statistics keyed by channel label, in channel order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelStats {
    entries: Vec<(String, IntensityStats)>,
}

impl ChannelStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next channel; labels follow insertion order.
    pub fn push(&mut self, stats: IntensityStats) {
        let label = channel_label(self.entries.len());
        self.entries.push((label, stats));
    }

    pub fn get(&self, label: &str) -> Option<&IntensityStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IntensityStats)> {
        self.entries.iter().map(|(label, stats)| (label.as_str(), stats))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<IntensityStats> for ChannelStats {
    fn from_iter<I: IntoIterator<Item = IntensityStats>>(iter: I) -> Self {
        let mut channels = ChannelStats::new();
        for stats in iter {
            channels.push(stats);
        }
        channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_one_based() {
        assert_eq!(channel_label(0), "Channel_1");
        assert_eq!(channel_label(11), "Channel_12");
    }

    #[test]
    fn test_insertion_order_is_channel_order() {
        let channels: ChannelStats = (0..12)
            .map(|i| IntensityStats::new(i as f64, 0.0))
            .collect();

        let labels: Vec<&str> = channels.labels().collect();
        assert_eq!(labels[1], "Channel_2");
        assert_eq!(labels[9], "Channel_10");
        assert_eq!(labels.len(), 12);
        assert_eq!(channels.get("Channel_10").unwrap().mean, 9.0);
        assert!(channels.get("Channel_13").is_none());
    }
}
