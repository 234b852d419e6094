use super::{q, BandedStrategy, SubjectTables};

pub const SLUG: &str = "science";

pub fn strategy() -> BandedStrategy {
    BandedStrategy::new(SLUG, &TABLES)
}

#[rustfmt::skip]
pub static TABLES: SubjectTables = SubjectTables {
    focus: [
        [
            "living things and the five senses",
            "weather, seasons and everyday materials",
        ],
        [
            "ecosystems and states of matter",
            "energy, forces and the water cycle",
        ],
        [
            "cells, matter and Earth systems",
            "genetics, chemical reactions and motion",
        ],
        [
            "biology, chemistry and physics foundations",
            "stoichiometry, energy and evolution",
        ],
    ],
    questions: [
        // early elementary
        [
            [
                q("Which of these is a living thing?", ["rock", "tree", "chair", "cloud"], 1,
                  "A tree grows, needs water and makes new trees, so it is alive."),
                q("Which sense do you use to hear sounds?", ["sight", "touch", "hearing", "taste"], 2,
                  "We use our ears and our sense of hearing to notice sounds."),
                q("What do plants need to grow?", ["sunlight and water", "sand and noise", "plastic and paper", "darkness only"], 0,
                  "Plants use sunlight and water to make their food."),
                q("Which animal has feathers?", ["dog", "fish", "frog", "bird"], 3,
                  "Birds are the only animals with feathers."),
                q("What do we call a baby frog?", ["puppy", "tadpole", "calf", "chick"], 1,
                  "Frogs hatch from eggs as tadpoles."),
            ],
            [
                q("Which season is usually the coldest?", ["summer", "spring", "winter", "fall"], 2,
                  "Winter has the shortest days and the coldest weather."),
                q("What falls from clouds when it rains?", ["water", "sand", "leaves", "smoke"], 0,
                  "Rain is drops of water falling from clouds."),
                q("Which material is attracted to a magnet?", ["wood", "iron", "plastic", "glass"], 1,
                  "Magnets pull on metals such as iron."),
                q("What happens to ice when it is left in the sun?", ["It grows bigger", "It turns to stone", "It stays the same", "It melts"], 3,
                  "Heat from the sun melts solid ice into liquid water."),
                q("Which tool measures temperature?", ["ruler", "scale", "thermometer", "clock"], 2,
                  "A thermometer shows how hot or cold something is."),
            ],
        ],
        // elementary
        [
            [
                q("What are the three common states of matter?", ["solid, liquid, gas", "hot, warm, cold", "rock, water, air", "big, medium, small"], 0,
                  "Matter is usually found as a solid, a liquid or a gas."),
                q("What gas do plants release during photosynthesis?", ["carbon dioxide", "oxygen", "helium", "nitrogen"], 1,
                  "Plants take in carbon dioxide and release oxygen."),
                q("Which animal is a herbivore?", ["lion", "shark", "cow", "eagle"], 2,
                  "Herbivores eat only plants, like a cow eating grass."),
                q("What is the closest star to Earth?", ["Polaris", "Sirius", "Alpha Centauri", "The Sun"], 3,
                  "The Sun is a star and it is the closest one to Earth."),
                q("What force pulls objects toward Earth?", ["magnetism", "gravity", "friction", "electricity"], 1,
                  "Gravity pulls objects toward the center of Earth."),
            ],
            [
                q("What is it called when water vapor turns into liquid water?", ["evaporation", "condensation", "precipitation", "freezing"], 1,
                  "Condensation forms clouds and the drops on a cold glass."),
                q("Which is a renewable energy source?", ["coal", "oil", "solar power", "natural gas"], 2,
                  "Sunlight is replaced naturally, so solar power is renewable."),
                q("What force slows down a sliding object?", ["friction", "gravity", "buoyancy", "inertia"], 0,
                  "Friction acts between surfaces and opposes motion."),
                q("Which part of a plant absorbs water from the soil?", ["leaves", "flowers", "stem", "roots"], 3,
                  "Roots take in water and minerals from the soil."),
                q("What type of circuit has only one path for electricity?", ["parallel circuit", "series circuit", "open circuit", "short circuit"], 1,
                  "In a series circuit the current flows through a single path."),
            ],
        ],
        // middle
        [
            [
                q("What is the basic unit of life?", ["atom", "cell", "organ", "tissue"], 1,
                  "All living things are made of one or more cells."),
                q("Which organelle is known as the powerhouse of the cell?", ["nucleus", "ribosome", "mitochondrion", "cell wall"], 2,
                  "Mitochondria release energy from food through cellular respiration."),
                q("What is the chemical formula for water?", ["H2O", "CO2", "O2", "NaCl"], 0,
                  "Each water molecule has two hydrogen atoms and one oxygen atom."),
                q("Which layer of Earth do we live on?", ["mantle", "outer core", "inner core", "crust"], 3,
                  "The crust is Earth's thin, rocky outer layer."),
                q("What is the pH of a neutral solution?", ["0", "7", "10", "14"], 1,
                  "On the pH scale, 7 is neutral, lower is acidic and higher is basic."),
            ],
            [
                q("Which molecule carries genetic information?", ["ATP", "DNA", "glucose", "protein"], 1,
                  "DNA stores the instructions for building and running an organism."),
                q("What does the law of conservation of mass state?", ["Mass is neither created nor destroyed in a chemical reaction", "Mass always increases in a reaction", "Mass is always converted into heat", "Mass depends on temperature"], 0,
                  "The total mass of the reactants equals the total mass of the products."),
                q("A car travels 120 km in 2 hours. What is its average speed?", ["240 km/h", "30 km/h", "60 km/h", "120 km/h"], 2,
                  "Speed = distance ÷ time = 120 km ÷ 2 h = 60 km/h."),
                q("Which of Newton's laws states that every action has an equal and opposite reaction?", ["First law", "Second law", "Law of gravitation", "Third law"], 3,
                  "Newton's third law describes paired action and reaction forces."),
                q("If both parents pass on a recessive allele, which trait will the offspring show?", ["the dominant trait", "the recessive trait", "no trait", "a random unrelated trait"], 1,
                  "With two recessive alleles there is no dominant allele to mask the trait."),
            ],
        ],
        // high school
        [
            [
                q("What is the charge of a proton?", ["negative", "positive", "neutral", "it varies"], 1,
                  "Protons carry a positive charge; electrons are negative."),
                q("What is the SI unit of force?", ["joule", "watt", "newton", "pascal"], 2,
                  "Force is measured in newtons (kg·m/s²)."),
                q("Which process produces gametes with half the chromosome number?", ["meiosis", "mitosis", "osmosis", "fermentation"], 0,
                  "Meiosis halves the chromosome number to form sex cells."),
                q("What is the atomic number of carbon?", ["12", "8", "14", "6"], 3,
                  "Carbon has six protons, so its atomic number is 6."),
                q("What type of bond forms when atoms share electrons?", ["ionic bond", "covalent bond", "metallic bond", "hydrogen bond"], 1,
                  "Covalent bonds are formed by shared electron pairs."),
            ],
            [
                q("How many moles are in 36 grams of water (molar mass 18 g/mol)?", ["1", "2", "18", "0.5"], 1,
                  "Moles = mass ÷ molar mass = 36 ÷ 18 = 2."),
                q("What is the kinetic energy of a 2 kg object moving at 3 m/s?", ["6 J", "3 J", "9 J", "18 J"], 2,
                  "KE = ½mv² = ½ × 2 × 3² = 9 J."),
                q("Which mechanism did Darwin propose as the main driver of evolution?", ["natural selection", "spontaneous generation", "inheritance of acquired traits", "genetic engineering"], 0,
                  "Natural selection favors traits that improve survival and reproduction."),
                q("What coefficient of O2 balances CH4 + _O2 → CO2 + 2H2O?", ["1", "3", "4", "2"], 3,
                  "The products contain four oxygen atoms, which requires 2 O2."),
                q("What current flows through a 10 Ω resistor with 20 V across it?", ["200 A", "2 A", "0.5 A", "30 A"], 1,
                  "Ohm's law: I = V ÷ R = 20 ÷ 10 = 2 A."),
            ],
        ],
    ],
};
