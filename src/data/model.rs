use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one row of the Pokédex table
// ---------------------------------------------------------------------------

/// A single creature. Immutable once loaded.
///
/// Missing values in the physical and battle columns are stored as `NaN`
/// and skipped by the mean computations downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub pokedex_number: u32,
    pub name: String,
    /// Positive integer cohort.
    pub generation: u32,
    /// Raw rarity tier, e.g. `"Normal"`, `"Legendary"`, `"Mythical"`.
    pub status: String,
    pub species: String,
    pub type_1: String,
    /// `None` when the creature has a single type.
    pub type_2: Option<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub sp_attack: f64,
    pub sp_defense: f64,
    pub speed: f64,
    /// Canonical strength figure from the file. Not assumed to equal the
    /// sum of the six stats.
    pub total_points: f64,
    pub catch_rate: f64,
    /// `None` means genderless.
    pub percentage_male: Option<f64>,
}

impl Record {
    /// Whether the record has `ty` as either its primary or secondary type.
    pub fn has_type(&self, ty: &str) -> bool {
        self.type_1 == ty || self.type_2.as_deref() == Some(ty)
    }
}

// ---------------------------------------------------------------------------
// Stat – the six battle statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAttack,
        Stat::SpDefense,
        Stat::Speed,
    ];

    pub fn of(self, r: &Record) -> f64 {
        match self {
            Stat::Hp => r.hp,
            Stat::Attack => r.attack,
            Stat::Defense => r.defense,
            Stat::SpAttack => r.sp_attack,
            Stat::SpDefense => r.sp_defense,
            Stat::Speed => r.speed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Ataque",
            Stat::Defense => "Defesa",
            Stat::SpAttack => "Ataque Esp.",
            Stat::SpDefense => "Defesa Esp.",
            Stat::Speed => "Velocidade",
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct values used by the filter
/// controls.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in file order.
    pub records: Vec<Record>,
    /// Distinct generations, ascending.
    pub generations: BTreeSet<u32>,
    /// Distinct primary and secondary types, alphabetical.
    pub types: BTreeSet<String>,
    /// Distinct statuses, alphabetical.
    pub statuses: BTreeSet<String>,
}

impl Dataset {
    /// Build the distinct value sets from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut generations = BTreeSet::new();
        let mut types = BTreeSet::new();
        let mut statuses = BTreeSet::new();

        for rec in &records {
            generations.insert(rec.generation);
            types.insert(rec.type_1.clone());
            if let Some(t2) = &rec.type_2 {
                types.insert(t2.clone());
            }
            statuses.insert(rec.status.clone());
        }

        Dataset {
            records,
            generations,
            types,
            statuses,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Record;

    /// A record with every stat set to `stat` and no secondary type.
    pub fn record(name: &str, generation: u32, type_1: &str, stat: f64) -> Record {
        Record {
            pokedex_number: 1,
            name: name.to_string(),
            generation,
            status: "Normal".to_string(),
            species: format!("{name} Pokémon"),
            type_1: type_1.to_string(),
            type_2: None,
            height_m: 1.0,
            weight_kg: 10.0,
            hp: stat,
            attack: stat,
            defense: stat,
            sp_attack: stat,
            sp_defense: stat,
            speed: stat,
            total_points: stat * 6.0,
            catch_rate: 45.0,
            percentage_male: Some(50.0),
        }
    }

    pub fn dual(name: &str, generation: u32, type_1: &str, type_2: &str) -> Record {
        Record {
            type_2: Some(type_2.to_string()),
            ..record(name, generation, type_1, 50.0)
        }
    }

    pub fn with_status(mut rec: Record, status: &str) -> Record {
        rec.status = status.to_string();
        rec
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{dual, record};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn distinct_values_include_secondary_types() {
        let ds = Dataset::from_records(vec![
            record("Bulbasaur", 1, "Grass", 45.0),
            dual("Charizard", 1, "Fire", "Flying"),
            record("Chikorita", 2, "Grass", 45.0),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.generations.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(
            ds.types.iter().cloned().collect::<Vec<_>>(),
            vec!["Fire", "Flying", "Grass"]
        );
        assert_eq!(ds.statuses.len(), 1);
    }

    #[test]
    fn has_type_checks_both_slots() {
        let rec = dual("Charizard", 1, "Fire", "Flying");
        assert!(rec.has_type("Fire"));
        assert!(rec.has_type("Flying"));
        assert!(!rec.has_type("Dragon"));
    }
}
