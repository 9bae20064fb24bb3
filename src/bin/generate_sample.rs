use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const TYPES: [&str; 18] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

const SYLLABLES: [&str; 16] = [
    "pi", "ka", "chu", "bul", "ba", "saur", "char", "man", "der", "squi", "tle", "mew", "zu",
    "bat", "don", "ra",
];

/// Possible `percentage_male` values in the real data; `None` is genderless.
const GENDER_RATIOS: [Option<f64>; 8] = [
    Some(50.0),
    Some(87.5),
    Some(75.0),
    Some(25.0),
    Some(12.5),
    Some(100.0),
    Some(0.0),
    None,
];

#[derive(Debug, Serialize)]
struct SampleRow {
    pokedex_number: i64,
    name: String,
    generation: i64,
    status: String,
    species: String,
    type_1: String,
    type_2: Option<String>,
    height_m: f64,
    weight_kg: f64,
    total_points: f64,
    hp: f64,
    attack: f64,
    defense: f64,
    sp_attack: f64,
    sp_defense: f64,
    speed: f64,
    catch_rate: f64,
    percentage_male: Option<f64>,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }

    /// Integer stat in `[lo, hi]`.
    fn stat(&mut self, lo: f64, hi: f64) -> f64 {
        (lo + self.next_f64() * (hi - lo)).round()
    }
}

fn generate_row(id: i64, rng: &mut SimpleRng) -> SampleRow {
    let generation = 1 + (id - 1) / 100;
    let n_syllables = 2 + rng.below(2);
    let raw_name: String = (0..n_syllables).map(|_| *rng.pick(&SYLLABLES)).collect();
    let mut name_chars = raw_name.chars();
    let name = match name_chars.next() {
        Some(first) => first.to_uppercase().chain(name_chars).collect(),
        None => raw_name,
    };

    let roll = rng.next_f64();
    let (status, boost) = if roll < 0.03 {
        ("Legendary", 1.6)
    } else if roll < 0.05 {
        ("Sub Legendary", 1.4)
    } else if roll < 0.07 {
        ("Mythical", 1.5)
    } else {
        ("Normal", 1.0)
    };

    let type_1 = rng.pick(&TYPES).to_string();
    let type_2 = if rng.next_f64() < 0.45 {
        Some(rng.pick(&TYPES).to_string()).filter(|t| *t != type_1)
    } else {
        None
    };

    let hp = rng.stat(20.0, 110.0 * boost);
    let attack = rng.stat(20.0, 120.0 * boost);
    let defense = rng.stat(20.0, 120.0 * boost);
    let sp_attack = rng.stat(20.0, 120.0 * boost);
    let sp_defense = rng.stat(20.0, 120.0 * boost);
    let speed = rng.stat(15.0, 120.0 * boost);
    let total_points = hp + attack + defense + sp_attack + sp_defense + speed;

    // Stronger creatures are harder to catch.
    let catch_rate = (300.0 - total_points * 0.45 + rng.stat(-30.0, 30.0)).clamp(3.0, 255.0);
    let percentage_male = if status == "Normal" {
        *rng.pick(&GENDER_RATIOS)
    } else {
        None
    };

    SampleRow {
        pokedex_number: id,
        species: format!("{name} Pokémon"),
        name,
        generation,
        status: status.to_string(),
        type_1,
        type_2,
        height_m: (rng.next_f64() * 3.0 * 10.0).round() / 10.0 + 0.1,
        weight_kg: (rng.next_f64() * 200.0 * 10.0).round() / 10.0 + 0.1,
        total_points,
        hp,
        attack,
        defense,
        sp_attack,
        sp_defense,
        speed,
        catch_rate: catch_rate.round(),
        percentage_male,
    }
}

fn write_csv(rows: &[SampleRow], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(rows: &[SampleRow], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let strings = |f: fn(&SampleRow) -> Option<&str>| -> ArrayRef {
        Arc::new(rows.iter().map(f).collect::<StringArray>())
    };
    let floats = |f: fn(&SampleRow) -> Option<f64>| -> ArrayRef {
        Arc::new(rows.iter().map(f).collect::<Float64Array>())
    };
    let ints = |f: fn(&SampleRow) -> i64| -> ArrayRef {
        Arc::new(Int64Array::from(rows.iter().map(f).collect::<Vec<_>>()))
    };

    let columns: Vec<(&str, DataType, bool, ArrayRef)> = vec![
        ("pokedex_number", DataType::Int64, false, ints(|r| r.pokedex_number)),
        ("name", DataType::Utf8, false, strings(|r| Some(r.name.as_str()))),
        ("generation", DataType::Int64, false, ints(|r| r.generation)),
        ("status", DataType::Utf8, false, strings(|r| Some(r.status.as_str()))),
        ("species", DataType::Utf8, false, strings(|r| Some(r.species.as_str()))),
        ("type_1", DataType::Utf8, false, strings(|r| Some(r.type_1.as_str()))),
        ("type_2", DataType::Utf8, true, strings(|r| r.type_2.as_deref())),
        ("height_m", DataType::Float64, false, floats(|r| Some(r.height_m))),
        ("weight_kg", DataType::Float64, false, floats(|r| Some(r.weight_kg))),
        ("total_points", DataType::Float64, false, floats(|r| Some(r.total_points))),
        ("hp", DataType::Float64, false, floats(|r| Some(r.hp))),
        ("attack", DataType::Float64, false, floats(|r| Some(r.attack))),
        ("defense", DataType::Float64, false, floats(|r| Some(r.defense))),
        ("sp_attack", DataType::Float64, false, floats(|r| Some(r.sp_attack))),
        ("sp_defense", DataType::Float64, false, floats(|r| Some(r.sp_defense))),
        ("speed", DataType::Float64, false, floats(|r| Some(r.speed))),
        ("catch_rate", DataType::Float64, false, floats(|r| Some(r.catch_rate))),
        ("percentage_male", DataType::Float64, true, floats(|r| r.percentage_male)),
    ];

    let schema = Arc::new(Schema::new(
        columns
            .iter()
            .map(|(name, dt, nullable, _)| Field::new(*name, dt.clone(), *nullable))
            .collect::<Vec<_>>(),
    ));
    let arrays: Vec<ArrayRef> = columns.into_iter().map(|(_, _, _, a)| a).collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;

    let file = std::fs::File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SimpleRng::new(42);

    // Nine generations of 100 creatures each
    let rows: Vec<SampleRow> = (1..=900).map(|id| generate_row(id, &mut rng)).collect();

    write_csv(&rows, "sample_pokedex.csv")?;
    write_parquet(&rows, "sample_pokedex.parquet")?;

    println!(
        "Wrote {} records to sample_pokedex.csv and sample_pokedex.parquet",
        rows.len()
    );
    Ok(())
}
