use super::{q, BandedStrategy, SubjectTables};

pub const SLUG: &str = "mathematics";

pub fn strategy() -> BandedStrategy {
    BandedStrategy::new(SLUG, &TABLES)
}

#[rustfmt::skip]
pub static TABLES: SubjectTables = SubjectTables {
    focus: [
        [
            "counting and number recognition",
            "addition and subtraction within 20",
        ],
        [
            "multiplication facts and place value",
            "fractions, decimals and multi-step word problems",
        ],
        [
            "ratios, integers and one-step equations",
            "linear equations and proportional reasoning",
        ],
        [
            "algebraic expressions and functions",
            "quadratics, systems of equations and trigonometry",
        ],
    ],
    questions: [
        // early elementary
        [
            [
                q("What number comes after 7?", ["6", "8", "9", "5"], 1,
                  "Counting up by one from 7 gives 8."),
                q("How many sides does a triangle have?", ["3", "2", "4", "5"], 0,
                  "A triangle is a shape with three sides."),
                q("What is 2 + 3?", ["4", "6", "5", "7"], 2,
                  "Two plus three equals five."),
                q("Which number is the largest?", ["3", "6", "1", "9"], 3,
                  "9 is greater than 3, 6 and 1."),
                q("What is 5 - 1?", ["3", "4", "5", "6"], 1,
                  "Taking one away from five leaves four."),
            ],
            [
                q("What is 8 + 7?", ["14", "15", "16", "13"], 1,
                  "8 + 7 = 15. Make a ten: 8 + 2 = 10, then add the remaining 5."),
                q("What is 13 - 5?", ["8", "7", "9", "6"], 0,
                  "13 - 5 = 8. Count back five from 13."),
                q("Which pair of numbers adds up to 10?", ["4 and 5", "3 and 6", "6 and 4", "2 and 7"], 2,
                  "6 + 4 = 10; the other pairs add up to 9."),
                q("Sam has 12 apples and gives away 4. How many are left?", ["6", "7", "9", "8"], 3,
                  "12 - 4 = 8 apples remain."),
                q("What is the value of the 1 in the number 16?", ["1 one", "1 ten", "1 hundred", "16 ones"], 1,
                  "The 1 is in the tens place, so it is worth ten."),
            ],
        ],
        // elementary
        [
            [
                q("What is 6 × 4?", ["20", "24", "28", "10"], 1,
                  "Six groups of four make 24."),
                q("What is 36 ÷ 6?", ["6", "5", "7", "8"], 0,
                  "6 × 6 = 36, so 36 ÷ 6 = 6."),
                q("Which fraction is equal to one half?", ["1/3", "1/4", "2/4", "3/5"], 2,
                  "Two of four equal parts is the same as one of two equal parts."),
                q("What is 327 rounded to the nearest hundred?", ["330", "400", "320", "300"], 3,
                  "327 is closer to 300 than to 400."),
                q("What is the perimeter of a square with sides of 5 cm?", ["10 cm", "20 cm", "25 cm", "15 cm"], 1,
                  "A square has four equal sides: 4 × 5 cm = 20 cm."),
            ],
            [
                q("What is 3/4 + 1/8?", ["4/12", "7/8", "4/8", "5/8"], 1,
                  "3/4 equals 6/8, and 6/8 + 1/8 = 7/8."),
                q("Which decimal is equal to 3/5?", ["0.6", "0.35", "0.53", "0.3"], 0,
                  "3/5 = 6/10 = 0.6."),
                q("A box holds 24 pencils. How many pencils are in 7 boxes?", ["148", "158", "168", "178"], 2,
                  "24 × 7 = 168."),
                q("What is the area of a rectangle 9 m long and 6 m wide?", ["30 m²", "15 m²", "45 m²", "54 m²"], 3,
                  "Area = length × width = 9 × 6 = 54 square metres."),
                q("What is 2.5 × 4?", ["8", "10", "6.5", "12"], 1,
                  "2 × 4 = 8 and 0.5 × 4 = 2, so 2.5 × 4 = 10."),
            ],
        ],
        // middle
        [
            [
                q("Solve for x: x + 9 = 15", ["6", "24", "5", "9"], 0,
                  "Subtract 9 from both sides: x = 6."),
                q("What is -3 + 8?", ["-11", "5", "-5", "11"], 1,
                  "Starting at -3 and moving 8 to the right lands on 5."),
                q("A recipe uses 2 cups of flour for every 3 cups of milk. What is the ratio of flour to milk?", ["3:2", "2:5", "2:3", "5:3"], 2,
                  "Flour comes first: 2 cups of flour to 3 cups of milk is 2:3."),
                q("What is 25% of 80?", ["25", "16", "40", "20"], 3,
                  "25% is one quarter, and 80 ÷ 4 = 20."),
                q("What is the value of 3²?", ["6", "9", "5", "12"], 1,
                  "3² means 3 × 3, which is 9."),
            ],
            [
                q("Solve for x: 3x - 7 = 11", ["6", "18", "4", "3"], 0,
                  "Add 7 to get 3x = 18, then divide by 3: x = 6."),
                q("What is the slope of the line y = 4x + 2?", ["2", "4", "6", "1/4"], 1,
                  "In y = mx + b the slope is m, which is 4."),
                q("If 5 notebooks cost $15, how much do 8 notebooks cost?", ["$30", "$20", "$24", "$40"], 2,
                  "Each notebook costs $3, so 8 notebooks cost $24."),
                q("What is the area of a circle with radius 3? (use π ≈ 3.14)", ["9.42", "18.84", "37.68", "28.26"], 3,
                  "Area = πr² = 3.14 × 9 = 28.26."),
                q("Which expression is equivalent to 2(x + 5)?", ["2x + 5", "2x + 10", "x + 10", "2x + 7"], 1,
                  "Distribute the 2 to both terms: 2x + 10."),
            ],
        ],
        // high school
        [
            [
                q("Simplify: 3x + 4x - 2", ["7x - 2", "5x", "7x + 2", "12x - 2"], 0,
                  "Combine like terms: 3x + 4x = 7x, leaving 7x - 2."),
                q("If f(x) = 2x + 1, what is f(3)?", ["6", "7", "5", "9"], 1,
                  "f(3) = 2(3) + 1 = 7."),
                q("Factor: x² - 9", ["(x - 3)²", "(x + 9)(x - 1)", "(x - 3)(x + 3)", "(x - 9)(x + 1)"], 2,
                  "x² - 9 is a difference of squares: (x - 3)(x + 3)."),
                q("What is the y-intercept of y = -2x + 5?", ["-2", "2", "-5", "5"], 3,
                  "In y = mx + b the y-intercept is b, which is 5."),
                q("Solve: 2x + 3 = x + 10", ["13", "7", "3", "10"], 1,
                  "Subtract x and 3 from both sides: x = 7."),
            ],
            [
                q("What are the solutions of x² - 5x + 6 = 0?", ["x = 2 and x = 3", "x = -2 and x = -3", "x = 1 and x = 6", "x = -1 and x = 6"], 0,
                  "x² - 5x + 6 factors to (x - 2)(x - 3)."),
                q("Solve the system x + y = 10 and x - y = 2. What is x?", ["4", "6", "8", "5"], 1,
                  "Adding the equations gives 2x = 12, so x = 6."),
                q("In a right triangle, sin θ is the ratio of which sides?", ["adjacent / hypotenuse", "opposite / adjacent", "opposite / hypotenuse", "hypotenuse / opposite"], 2,
                  "Sine is opposite over hypotenuse (SOH in SOH-CAH-TOA)."),
                q("What is the vertex of y = (x - 2)² + 3?", ["(-2, 3)", "(2, -3)", "(3, 2)", "(2, 3)"], 3,
                  "In vertex form y = (x - h)² + k the vertex is (h, k) = (2, 3)."),
                q("What is log₁₀(1000)?", ["2", "3", "10", "100"], 1,
                  "10³ = 1000, so log₁₀(1000) = 3."),
            ],
        ],
    ],
};
