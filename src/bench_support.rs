use mask_core::{FunctionCatalog, MaskExtension, Value};
use rand::{distributions::Alphanumeric, rngs::StdRng, Rng, SeedableRng};

// Re-export external crates needed by benches
pub use mask_core;

/// Generated rows for each masking function, built from a fixed seed so runs
/// are comparable.
pub struct MaskBenchFixture {
    pub catalog: FunctionCatalog,
    pub strings: Vec<String>,
    pub emails: Vec<String>,
}

impl MaskBenchFixture {
    pub fn new(rows: usize, string_len: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(0x6d61_736b);
        let strings = (0..rows)
            .map(|_| random_string(&mut rng, string_len))
            .collect();
        let emails = (0..rows).map(|_| random_email(&mut rng)).collect();

        Self {
            catalog: MaskExtension::catalog(),
            strings,
            emails,
        }
    }

    /// `mask_string` rows hiding the middle half of each string.
    pub fn mask_string_rows(&self) -> Vec<Vec<Value>> {
        self.strings
            .iter()
            .map(|s| {
                let quarter = (s.len() / 4) as i64;
                vec![
                    Value::from(s.as_str()),
                    Value::from(quarter + 1),
                    Value::from(quarter * 2),
                    Value::from("*"),
                ]
            })
            .collect()
    }

    pub fn mask_email_rows(&self) -> Vec<Vec<Value>> {
        self.emails
            .iter()
            .map(|e| vec![Value::from(e.as_str())])
            .collect()
    }

    pub fn scramble_string_rows(&self) -> Vec<Vec<Value>> {
        self.strings
            .iter()
            .map(|s| vec![Value::from(s.as_str())])
            .collect()
    }
}

pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn random_email<R: Rng>(rng: &mut R) -> String {
    let local_len = rng.gen_range(3..=16);
    let local = random_string(rng, local_len).to_lowercase();
    let domain = random_string(rng, 8).to_lowercase();
    format!("{local}@{domain}.example")
}
