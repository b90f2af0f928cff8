//! Writes a deterministic sample station CSV for manual testing:
//! `cargo run --bin generate_sample` then `cargo run -- sample_stations.csv`.

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

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

struct CityTemplate {
    state: &'static str,
    city: &'static str,
    lat: f64,
    lon: f64,
    stations: usize,
}

const CITIES: [CityTemplate; 6] = [
    CityTemplate { state: "CA", city: "Palo Alto", lat: 37.4419, lon: -122.1430, stations: 8 },
    CityTemplate { state: "CA", city: "Fresno", lat: 36.7378, lon: -119.7871, stations: 5 },
    CityTemplate { state: "CA", city: "San Diego", lat: 32.7157, lon: -117.1611, stations: 10 },
    CityTemplate { state: "TX", city: "Austin", lat: 30.2672, lon: -97.7431, stations: 9 },
    CityTemplate { state: "TX", city: "Houston", lat: 29.7604, lon: -95.3698, stations: 7 },
    CityTemplate { state: "WA", city: "Seattle", lat: 47.6062, lon: -122.3321, stations: 6 },
];

const FACILITY_TYPES: [&str; 5] = [
    "MUNI_GOV",
    "PARKING_GARAGE",
    "SHOPPING_CENTER",
    "HOTEL",
    "CAR_DEALER",
];

const PRICING_VALUES: [&str; 4] = ["free", "free", "$1.00/hr", "$0.25/kWh"];

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_stations.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Station Name",
            "State",
            "City",
            "Latitude",
            "Longitude",
            "Facility Type",
            "EV Level2 EVSE Num",
            "EV DC Fast Count",
            "EV Pricing",
            "Access Days Time2",
        ])
        .expect("Failed to write header");

    let mut total = 0usize;
    for tpl in &CITIES {
        for i in 0..tpl.stations {
            let lat = tpl.lat + (rng.next_f64() - 0.5) * 0.08;
            let lon = tpl.lon + (rng.next_f64() - 0.5) * 0.08;
            let facility = FACILITY_TYPES[rng.below(FACILITY_TYPES.len() as u64) as usize];
            let pricing = PRICING_VALUES[rng.below(PRICING_VALUES.len() as u64) as usize];
            let access_score = 1 + rng.below(24);

            // Roughly one station in four is DC-fast only; leave its
            // Level-2 cell empty to exercise the null-coercion path.
            let dc_only = rng.below(4) == 0;
            let level2 = if dc_only {
                String::new()
            } else {
                (1 + rng.below(8)).to_string()
            };
            let dc_fast = if dc_only || rng.below(3) == 0 {
                (1 + rng.below(4)).to_string()
            } else {
                String::new()
            };

            let name = format!("{} {} #{}", tpl.city, facility, i + 1);
            writer
                .write_record([
                    name.as_str(),
                    tpl.state,
                    tpl.city,
                    format!("{lat:.5}").as_str(),
                    format!("{lon:.5}").as_str(),
                    facility,
                    level2.as_str(),
                    dc_fast.as_str(),
                    pricing,
                    access_score.to_string().as_str(),
                ])
                .expect("Failed to write record");
            total += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {total} stations to {output_path}");
}
