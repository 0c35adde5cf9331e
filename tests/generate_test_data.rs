/// Test data generator for Luvlang Match
///
/// Generates a CSV file of dating profiles that can be imported into the
/// platform via the Appwrite Console.
///
/// Run: cargo run --bin generate-test-data

use std::fs::File;
use std::io::{BufWriter, Write};

const TEST_EMAIL: &str = "test-profiles@luvlang-match-test.local";

const NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Quinn", "Avery",
    "Blake", "Carter", "Dakota", "Emerson", "Finley", "Gray", "Hayden", "Indigo",
    "Jade", "Kai", "Lake", "Milo", "Nova", "Onyx", "Phoenix", "River", "Sage",
    "Skyler", "Tatum", "Unity", "Valentine", "Willow", "Xavier", "Zion", "Luna",
    "Max", "Sam", "Charlie", "Drew", "Ellis", "Frankie", "Grayson", "Harper", "Ivy",
];

const INTERESTS: &[&str] = &[
    "hiking", "chess", "cooking", "yoga", "photography", "travel", "music",
    "reading", "climbing", "painting", "running", "gaming", "dancing", "surfing",
    "cycling", "gardening", "cinema", "volunteering", "languages", "astronomy",
];

const VALUE_WORDS: &[&str] = &[
    "honesty", "kindness", "loyalty", "humor", "ambition", "empathy",
    "curiosity", "patience", "courage", "openness", "balance", "gratitude",
];

const GOAL_PHRASES: &[&str] = &[
    "start a family", "travel the world", "grow my career", "build a home",
    "write a book", "learn new languages", "live near the ocean",
    "give back to my community", "stay curious forever",
];

const CITIES: &[&str] = &[
    "Berlin", "Munich", "Hamburg", "Cologne", "Frankfurt",
    "Stuttgart", "Düsseldorf", "Nuremberg", "Leipzig", "Dortmund",
];

// Simple random number generator using system time
fn get_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos() as u64
}

fn rand_int(max: usize) -> usize {
    (get_seed() % max as u64) as usize
}

fn rand_choice<'a>(options: &'a [&'a str]) -> &'a str {
    options[rand_int(options.len())]
}

fn rand_sample(options: &[&str], count: usize) -> Vec<String> {
    let mut picked = Vec::new();
    let mut offset = rand_int(options.len());
    for _ in 0..count {
        let choice = options[offset % options.len()];
        if !picked.contains(&choice.to_string()) {
            picked.push(choice.to_string());
        }
        offset += 1 + rand_int(3);
    }
    picked
}

struct Profile {
    user_id: String,
    name: String,
    bio: String,
    interests: Vec<String>,
    values: String,
    life_goals: String,
    age: u8,
    location: String,
}

fn generate_profile(index: usize) -> Profile {
    let name = rand_choice(NAMES);
    let interests = rand_sample(INTERESTS, 3 + rand_int(4));
    let values = rand_sample(VALUE_WORDS, 3 + rand_int(3)).join(" ");
    let life_goals = rand_sample(GOAL_PHRASES, 2 + rand_int(2)).join(" and ");

    Profile {
        user_id: format!("test-user-{:04}", index),
        name: name.to_string(),
        bio: format!("{} from {} who loves {}", name, rand_choice(CITIES), interests[0]),
        interests,
        values,
        life_goals,
        age: 21 + rand_int(25) as u8,
        location: rand_choice(CITIES).to_string(),
    }
}

fn write_profiles_csv(profiles: &[Profile], path: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "userId,name,email,bio,interests,values,lifeGoals,age,location,isActive"
    )?;

    for p in profiles {
        writeln!(
            writer,
            "{},{},{},\"{}\",\"{}\",\"{}\",\"{}\",{},{},true",
            p.user_id,
            p.name,
            TEST_EMAIL,
            p.bio,
            p.interests.join(";"),
            p.values,
            p.life_goals,
            p.age,
            p.location,
        )?;
    }

    writer.flush()
}

fn main() -> std::io::Result<()> {
    let count = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100);

    println!("Generating {} test profiles...", count);

    let profiles: Vec<Profile> = (0..count).map(generate_profile).collect();
    write_profiles_csv(&profiles, "test_profiles.csv")?;

    println!("Wrote test_profiles.csv ({} rows)", profiles.len());
    println!("Import via Appwrite Console into the 'profiles' collection.");

    Ok(())
}
