use crate::types::{JobRecord, ProfessionalProfile, REMOTE_LOCATION, SYNTHETIC_SOURCE};
use crate::vocab::Vocabularies;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

/// Number of profiles generated for one snapshot.
pub const DEFAULT_PROFILE_COUNT: usize = 100;

/// Skills per profile are sampled without replacement from this range.
const SKILLS_PER_PROFILE: std::ops::RangeInclusive<usize> = 3..=8;

/// One synthetic job per title, in list order.
const JOB_TITLES: [&str; 15] = [
    "Senior Video Editor - Netflix Original Series",
    "Director of Photography - Independent Film",
    "VFX Supervisor - Marvel Studios",
    "Sound Designer - A24 Horror Film",
    "Production Designer - HBO Max Series",
    "Cinematographer - Documentary Film",
    "Assistant Director - Warner Bros Feature",
    "Makeup Department Head - Disney+ Fantasy",
    "Gaffer - Apple TV+ Drama Series",
    "Script Supervisor - Amazon Prime Thriller",
    "Casting Director - Indie Romance Film",
    "Location Manager - Netflix Action Series",
    "Stunt Coordinator - Fast & Furious Franchise",
    "Costume Designer - Period Drama Film",
    "Boom Operator - Sitcom Production",
];

/// Descriptions cycle if there are more titles than descriptions.
const JOB_DESCRIPTIONS: [&str; 15] = [
    "Seeking experienced editor for high-profile streaming series. Must have extensive experience with Avid Media Composer and collaborative post-production workflows.",
    "Looking for skilled cinematographer to shoot independent feature film. RED camera experience and natural lighting expertise required.",
    "VFX Supervisor needed for major superhero film. Strong background in Maya, Nuke, and team management essential.",
    "Sound designer for atmospheric horror film. Experience with Pro Tools, Foley recording, and sound library management preferred.",
    "Production designer for fantasy series set in medieval times. Strong attention to historical detail and large-scale set design required.",
    "Cinematographer for environmental documentary. Drone operation license and wildlife filming experience preferred.",
    "Assistant director for big-budget action film. Strong organizational skills and high-pressure set experience required.",
    "Makeup department head for fantasy series. Prosthetics, special effects makeup, and team leadership experience needed.",
    "Gaffer for critically acclaimed drama series. LED lighting expertise and color temperature mastery required.",
    "Script supervisor for psychological thriller. Continuity experience and meticulous attention to detail essential.",
    "Casting director for romantic comedy film. Strong industry connections and talent evaluation skills required.",
    "Location manager for action series. Scouting experience and permit negotiation skills essential.",
    "Stunt coordinator for major action franchise. Safety certification and wire work experience required.",
    "Costume designer for 1940s period drama. Historical research skills and fabric knowledge essential.",
    "Boom operator for multi-camera sitcom. Live audience experience and microphone technique expertise required.",
];

const FIRST_NAMES: [&str; 24] = [
    "Christopher", "Jennifer", "Michael", "Sarah", "David", "Emma", "Robert", "Lisa",
    "James", "Amanda", "Daniel", "Rachel", "Matthew", "Jessica", "Andrew", "Emily",
    "Ryan", "Ashley", "Kevin", "Michelle", "Brian", "Nicole", "John", "Stephanie",
];

const LAST_NAMES: [&str; 23] = [
    "Anderson", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
];

const BIOS: [&str; 8] = [
    "Award-winning filmmaker with over 15 years of experience in documentary and narrative film production.",
    "Experienced cinematographer specializing in natural light photography and handheld camera work.",
    "Post-production specialist with expertise in color grading, sound design, and visual effects.",
    "Creative producer with a proven track record of successful independent film projects.",
    "Visual effects artist with experience in both practical effects and digital compositing.",
    "Screenwriter focused on character-driven narratives and contemporary social issues.",
    "Production designer with extensive experience in period films and television series.",
    "Sound engineer specializing in location recording and post-production audio mixing.",
];

const EXPERIENCES: [&str; 10] = [
    "Lead Editor - \"Midnight Stories\" (2023)",
    "Director of Photography - \"Urban Legends\" (2022)",
    "VFX Supervisor - \"Digital Dreams\" (2023)",
    "Sound Designer - \"Whispers in the Dark\" (2022)",
    "Production Designer - \"The Last Dance\" (2023)",
    "Assistant Director - \"City Lights\" TV Series (2021-2023)",
    "Makeup Artist - \"Fantasy Realm\" (2022)",
    "Gaffer - \"Commercial Campaign\" (2023)",
    "Script Supervisor - \"Detective Stories\" (2022)",
    "Casting Director - \"Love in the City\" (2023)",
];

/// Produces schema-valid placeholder records from the static vocabularies and
/// curated corpora above. Used as the fallback job dataset when every live
/// source comes back empty, and as the sole producer of professional
/// profiles, which have no live-source equivalent.
pub struct SyntheticGenerator {
    vocab: Arc<Vocabularies>,
}

impl SyntheticGenerator {
    pub fn new(vocab: Arc<Vocabularies>) -> Self {
        Self { vocab }
    }

    /// Number of jobs `generate_jobs` yields.
    pub fn job_count() -> usize {
        JOB_TITLES.len()
    }

    /// One job per curated title, description cycled modulo, location drawn
    /// uniformly from the flattened location vocabulary.
    pub fn generate_jobs<R: Rng>(&self, rng: &mut R) -> Vec<JobRecord> {
        let cities = self.vocab.flattened_locations();

        let jobs: Vec<JobRecord> = JOB_TITLES
            .iter()
            .enumerate()
            .map(|(i, title)| JobRecord {
                title: title.to_string(),
                description: JOB_DESCRIPTIONS[i % JOB_DESCRIPTIONS.len()].to_string(),
                location: cities.choose(rng).copied().unwrap_or(REMOTE_LOCATION).to_string(),
                source: SYNTHETIC_SOURCE.to_string(),
            })
            .collect();

        info!("Generated {} fallback jobs", jobs.len());
        jobs
    }

    pub fn generate_profiles<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ProfessionalProfile> {
        let profiles = (0..count).map(|_| self.generate_profile(rng)).collect();
        info!("Generated {} professional profiles", count);
        profiles
    }

    /// Every field is sampled independently; role and experience are not
    /// cross-checked against each other. Duplicate full names are possible.
    fn generate_profile<R: Rng>(&self, rng: &mut R) -> ProfessionalProfile {
        let cities = self.vocab.flattened_locations();
        let skill_count = rng.gen_range(SKILLS_PER_PROFILE);

        ProfessionalProfile {
            first_name: choose_str(&FIRST_NAMES, rng),
            last_name: choose_str(&LAST_NAMES, rng),
            role: self
                .vocab
                .categories
                .choose(rng)
                .cloned()
                .unwrap_or_default(),
            bio: choose_str(&BIOS, rng),
            skills: self
                .vocab
                .skills
                .choose_multiple(rng, skill_count)
                .cloned()
                .collect(),
            experience: choose_str(&EXPERIENCES, rng),
            location: cities.choose(rng).copied().unwrap_or(REMOTE_LOCATION).to_string(),
        }
    }
}

fn choose_str<R: Rng>(options: &[&str], rng: &mut R) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}
