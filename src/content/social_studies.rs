use super::{q, BandedStrategy, SubjectTables};

pub const SLUG: &str = "social-studies";

pub fn strategy() -> BandedStrategy {
    BandedStrategy::new(SLUG, &TABLES)
}

#[rustfmt::skip]
pub static TABLES: SubjectTables = SubjectTables {
    focus: [
        [
            "family, community and community helpers",
            "maps, directions and good citizenship",
        ],
        [
            "geography, local government and early history",
            "economics, civics and regional studies",
        ],
        [
            "ancient civilizations and world geography",
            "revolutions, constitutions and global trade",
        ],
        [
            "world history and civic institutions",
            "political systems, macroeconomics and historical analysis",
        ],
    ],
    questions: [
        // early elementary
        [
            [
                q("Who helps put out fires in a community?", ["a baker", "a firefighter", "a farmer", "a pilot"], 1,
                  "Firefighters are community helpers who put out fires."),
                q("What is a map used for?", ["showing where places are", "telling time", "measuring weight", "cooking food"], 0,
                  "A map is a drawing that shows where places are."),
                q("Which of these is a rule you might follow at school?", ["Run in the hallway", "Shout during class", "Raise your hand to speak", "Leave without asking"], 2,
                  "Raising your hand lets everyone take turns speaking."),
                q("Where do people go to borrow books?", ["a bank", "a hospital", "a gas station", "a library"], 3,
                  "A library lends books to people in the community."),
                q("Which of these is a need rather than a want?", ["a toy", "food", "a video game", "candy"], 1,
                  "Needs are things we must have to live, like food."),
            ],
            [
                q("What does a compass rose on a map show?", ["directions", "population", "weather", "time zones"], 0,
                  "A compass rose shows north, south, east and west."),
                q("Which of these is a landform?", ["house", "mountain", "car", "road"], 1,
                  "A landform is a natural shape of the land, like a mountain."),
                q("What do we call a drawing that shows a place from above?", ["a poem", "a calendar", "a map", "a song"], 2,
                  "Maps show places as if we were looking down from above."),
                q("Which of these is a way to be a good citizen?", ["Litter in the park", "Break the rules", "Ignore your neighbors", "Help keep your community clean"], 3,
                  "Good citizens care for their community and the people in it."),
                q("What direction is opposite north?", ["east", "south", "west", "up"], 1,
                  "North and south are opposite directions."),
            ],
        ],
        // elementary
        [
            [
                q("What is the largest ocean on Earth?", ["Atlantic", "Pacific", "Indian", "Arctic"], 1,
                  "The Pacific Ocean is the largest and deepest ocean."),
                q("On which continent is Egypt located?", ["Asia", "Europe", "Africa", "South America"], 2,
                  "Egypt is in the northeast corner of Africa."),
                q("What do we call the leader of a city government?", ["mayor", "governor", "president", "judge"], 0,
                  "A mayor leads the government of a city or town."),
                q("What are lines of latitude used for?", ["measuring elevation", "showing roads", "naming rivers", "measuring distance north or south of the equator"], 3,
                  "Latitude lines run east-west and measure distance from the equator."),
                q("Why do people pay taxes?", ["To buy toys for themselves", "To pay for public services like schools and roads", "To join a club", "To travel abroad"], 1,
                  "Taxes fund services that everyone in a community shares."),
            ],
            [
                q("What is it called when people trade goods without using money?", ["barter", "tax", "loan", "profit"], 0,
                  "Bartering is the direct exchange of goods or services."),
                q("Which branch of government makes laws?", ["executive", "judicial", "legislative", "military"], 2,
                  "The legislative branch writes and passes laws."),
                q("What is a natural resource?", ["A factory-made product", "Something from nature that people use", "A type of money", "A government building"], 1,
                  "Water, trees, soil and minerals are natural resources."),
                q("What usually happens to the price of a product when demand rises and supply stays the same?", ["It usually falls", "It disappears", "It always stays the same", "It usually rises"], 3,
                  "When more people want the same amount of a good, its price tends to rise."),
                q("What is a primary source?", ["A textbook summary", "A first-hand record from the time period", "An encyclopedia entry", "A movie about history"], 1,
                  "Primary sources were created by people who witnessed the events."),
            ],
        ],
        // middle
        [
            [
                q("Which river was essential to ancient Egyptian civilization?", ["Amazon", "Nile", "Mississippi", "Danube"], 1,
                  "The Nile's yearly floods made farming possible in ancient Egypt."),
                q("Which ancient civilization developed democracy in Athens?", ["Ancient Greece", "Ancient China", "The Maya", "Ancient Persia"], 0,
                  "Athens in ancient Greece let citizens vote on laws."),
                q("What was the trade route that connected China to the Mediterranean called?", ["Appian Way", "Royal Road", "Silk Road", "Amber Road"], 2,
                  "The Silk Road carried silk, spices and ideas between East and West."),
                q("Which line divides Earth into the Northern and Southern Hemispheres?", ["Prime Meridian", "International Date Line", "Tropic of Cancer", "Equator"], 3,
                  "The equator circles Earth halfway between the poles."),
                q("What was the main purpose of the Great Wall of China?", ["to store grain", "to protect against invasions", "to host trade fairs", "to hold back floods"], 1,
                  "The wall was built to defend against invasions from the north."),
            ],
            [
                q("Which document begins with the words 'We the People'?", ["The Declaration of Independence", "The Magna Carta", "The U.S. Constitution", "The Bill of Rights"], 2,
                  "The Preamble of the U.S. Constitution opens with 'We the People'."),
                q("Which period of change began in Britain and transformed how goods were produced in the 1700s and 1800s?", ["The Industrial Revolution", "The Renaissance", "The Cold War", "The Crusades"], 0,
                  "Machines and factories replaced much hand production during the Industrial Revolution."),
                q("What is the principle that divides government power among branches?", ["federalism", "separation of powers", "monarchy", "popular sovereignty"], 1,
                  "Separation of powers keeps any one branch from holding all authority."),
                q("What is an export?", ["A good bought from another country", "A tax on imports", "A type of currency", "A good sold to another country"], 3,
                  "Exports are goods and services sold to buyers in other countries."),
                q("What was the main significance of the Magna Carta?", ["It ended the Roman Empire", "It limited the power of the king", "It created the United Nations", "It started the Industrial Revolution"], 1,
                  "The Magna Carta established that the king was also subject to the law."),
            ],
        ],
        // high school
        [
            [
                q("What was the Renaissance?", ["A revival of art and learning in Europe", "A war between France and England", "A trade agreement in Asia", "A religious council in Rome"], 0,
                  "The Renaissance renewed interest in classical art, science and learning."),
                q("Which international organization was founded in 1945 to promote peace?", ["NATO", "The League of Nations", "The European Union", "The United Nations"], 3,
                  "The United Nations was founded after World War II to maintain peace."),
                q("What is the role of the judicial branch?", ["to enforce laws", "to make laws", "to interpret laws", "to collect taxes"], 2,
                  "Courts interpret laws and decide whether they follow the constitution."),
                q("What does GDP measure?", ["a country's population", "the total value of goods and services a country produces", "a country's land area", "the number of exports"], 1,
                  "Gross domestic product is the market value of all final goods and services produced."),
                q("Which war was fought between 1914 and 1918?", ["World War II", "The Cold War", "World War I", "The Korean War"], 2,
                  "World War I lasted from 1914 to 1918."),
            ],
            [
                q("In which system does the government own most means of production?", ["capitalism", "command economy", "market economy", "feudalism"], 1,
                  "In a command economy the government decides what is produced."),
                q("What is inflation?", ["a general rise in prices over time", "a fall in unemployment", "an increase in exports", "a decrease in taxes"], 0,
                  "Inflation reduces the purchasing power of money."),
                q("What was the Cold War?", ["A war fought in Antarctica", "A conflict over trade in the 1800s", "A period of tension between the United States and the Soviet Union", "A civil war in Europe"], 2,
                  "The Cold War was a rivalry without direct large-scale fighting between the two powers."),
                q("What is the main purpose of a central bank?", ["to collect income taxes", "to write national laws", "to run public schools", "to manage a nation's money supply and interest rates"], 3,
                  "Central banks use monetary policy to keep prices and the economy stable."),
                q("Why is it important to evaluate bias in a historical source?", ["Biased sources are always false", "To understand the author's perspective and reliability", "Because only recent sources matter", "To avoid reading primary sources"], 1,
                  "Knowing a source's perspective helps historians judge how much to trust it."),
            ],
        ],
    ],
};
