use crate::data::model::Record;

/// Slices smaller than this percentage get no outside label.
pub const LABEL_MIN_PERCENT: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderBucket {
    MaleOnly,
    MostlyMale,
    Balanced,
    MostlyFemale,
    FemaleOnly,
    Genderless,
}

impl GenderBucket {
    /// Pie order.
    pub const ALL: [GenderBucket; 6] = [
        GenderBucket::MaleOnly,
        GenderBucket::MostlyMale,
        GenderBucket::Balanced,
        GenderBucket::MostlyFemale,
        GenderBucket::FemaleOnly,
        GenderBucket::Genderless,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GenderBucket::MaleOnly => "Apenas Macho",
            GenderBucket::MostlyMale => "Maioria Macho",
            GenderBucket::Balanced => "Equilibrado",
            GenderBucket::MostlyFemale => "Maioria Fêmea",
            GenderBucket::FemaleOnly => "Apenas Fêmea",
            GenderBucket::Genderless => "Sem Gênero",
        }
    }

    /// Closed percentage-male range, `None` for the genderless bucket.
    fn range(self) -> Option<(f64, f64)> {
        match self {
            GenderBucket::MaleOnly => Some((100.0, 100.0)),
            GenderBucket::MostlyMale => Some((66.7, 99.9)),
            GenderBucket::Balanced => Some((33.4, 66.6)),
            GenderBucket::MostlyFemale => Some((0.1, 33.3)),
            GenderBucket::FemaleOnly => Some((0.0, 0.0)),
            GenderBucket::Genderless => None,
        }
    }

    /// Whether a percentage-male value falls in this bucket. Values in the
    /// gaps between ranges (e.g. 99.95) belong to no bucket.
    pub fn contains(self, percentage_male: Option<f64>) -> bool {
        match (self.range(), percentage_male) {
            (None, None) => true,
            (Some((lo, hi)), Some(p)) => p >= lo && p <= hi,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderSlice {
    pub bucket: GenderBucket,
    pub count: usize,
    /// Share of all bucketed records, 0 when nothing was bucketed.
    pub percentage: f64,
}

impl GenderSlice {
    pub fn shows_label(&self) -> bool {
        self.percentage >= LABEL_MIN_PERCENT
    }
}

pub fn gender_distribution(filtered: &[&Record]) -> Vec<GenderSlice> {
    let counts: Vec<(GenderBucket, usize)> = GenderBucket::ALL
        .iter()
        .map(|&bucket| {
            let n = filtered
                .iter()
                .filter(|r| bucket.contains(r.percentage_male))
                .count();
            (bucket, n)
        })
        .collect();

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    counts
        .into_iter()
        .map(|(bucket, count)| GenderSlice {
            bucket,
            count,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}
