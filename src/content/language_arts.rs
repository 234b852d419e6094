use super::{q, BandedStrategy, SubjectTables};

pub const SLUG: &str = "language-arts";

pub fn strategy() -> BandedStrategy {
    BandedStrategy::new(SLUG, &TABLES)
}

#[rustfmt::skip]
pub static TABLES: SubjectTables = SubjectTables {
    focus: [
        [
            "letter sounds and sight words",
            "reading simple sentences and punctuation",
        ],
        [
            "parts of speech and finding the main idea",
            "figurative language and text structure",
        ],
        [
            "theme, point of view and sentence grammar",
            "argument, evidence and literary devices",
        ],
        [
            "literary analysis and essay organization",
            "rhetorical analysis and research writing",
        ],
    ],
    questions: [
        // early elementary
        [
            [
                q("Which word begins with the same sound as 'ball'?", ["cat", "bat", "sun", "map"], 1,
                  "'Ball' and 'bat' both begin with the /b/ sound."),
                q("Which word rhymes with 'hat'?", ["cat", "hop", "hit", "hut"], 0,
                  "'Hat' and 'cat' share the same ending sound, -at."),
                q("Which letter is a vowel?", ["b", "t", "e", "s"], 2,
                  "The vowels are a, e, i, o and u."),
                q("How many syllables are in the word 'apple'?", ["1", "3", "4", "2"], 3,
                  "Ap-ple has two beats, so it has two syllables."),
                q("Which word names an animal?", ["run", "dog", "blue", "happy"], 1,
                  "A dog is an animal; the other words describe actions or feelings."),
            ],
            [
                q("Which sentence ends with the correct punctuation?", ["Where is my hat.", "Can you help me?", "the dog ran", "Is it raining."], 1,
                  "A question ends with a question mark."),
                q("Which word should start with a capital letter?", ["tree", "monday", "apple", "jump"], 1,
                  "Days of the week are names, so Monday starts with a capital letter."),
                q("What is the opposite of 'big'?", ["large", "tall", "small", "huge"], 2,
                  "'Small' means the opposite of 'big'."),
                q("In the sentence 'The cat sleeps on the mat,' what is the cat doing?", ["eating", "running", "playing", "sleeping"], 3,
                  "The verb in the sentence is 'sleeps'."),
                q("Which word is a verb?", ["jump", "green", "chair", "soft"], 0,
                  "A verb is an action word, and 'jump' is an action."),
            ],
        ],
        // elementary
        [
            [
                q("Which word is a noun in the sentence 'The girl kicked the ball quickly'?", ["kicked", "the", "ball", "quickly"], 2,
                  "A noun names a person, place or thing; 'ball' is a thing."),
                q("What is the plural of 'child'?", ["childs", "children", "childes", "childen"], 1,
                  "'Child' has an irregular plural: 'children'."),
                q("Which word is an adjective?", ["slowly", "run", "under", "bright"], 3,
                  "An adjective describes a noun; 'bright' describes how something looks."),
                q("What is the main idea of a paragraph?", ["The most important point the paragraph makes", "The first word of the paragraph", "A detail about the setting", "The title of the book"], 0,
                  "The main idea is what the whole paragraph is mostly about."),
                q("Which word is a synonym for 'happy'?", ["sad", "joyful", "angry", "tired"], 1,
                  "Synonyms have similar meanings; 'joyful' means happy."),
            ],
            [
                q("Which sentence contains a simile?", ["The wind howled all night.", "She is as brave as a lion.", "The car is red.", "He ran to the store."], 1,
                  "A simile compares two things using 'like' or 'as'."),
                q("What is the prefix in the word 'unhappy'?", ["happy", "py", "un", "unh"], 2,
                  "The prefix 'un-' means 'not' and comes before the base word."),
                q("Which is the correct contraction for 'do not'?", ["dont", "do'nt", "d'ont", "don't"], 3,
                  "The apostrophe replaces the missing 'o' in 'not'."),
                q("Which pronoun does a first-person narrator use to refer to themselves?", ["I", "he", "she", "they"], 0,
                  "First-person narrators tell the story using 'I' and 'me'."),
                q("Which text structure explains why something happened?", ["Sequence", "Cause and effect", "Description", "Compare and contrast"], 1,
                  "Cause and effect shows what happened and why."),
            ],
        ],
        // middle
        [
            [
                q("What is the theme of a story?", ["The central message or lesson", "The place where the story happens", "The main character's name", "The order of events"], 0,
                  "The theme is the big idea or lesson the author wants to share."),
                q("Which sentence uses 'their', 'there' or 'they're' correctly?", ["Their going home.", "They're coats are wet.", "There house is big.", "They're going to the park."], 3,
                  "'They're' is short for 'they are'."),
                q("Which point of view uses 'he', 'she' and 'they' to tell the story?", ["First person", "Second person", "Third person", "No point of view"], 2,
                  "A third-person narrator refers to characters as he, she or they."),
                q("Which of these is a complete sentence?", ["Running through the park.", "The students finished their project.", "Because it was late.", "After the game ended."], 1,
                  "A complete sentence has a subject and a verb and expresses a full thought."),
                q("What is an antonym of 'generous'?", ["selfish", "kind", "giving", "friendly"], 0,
                  "Antonyms have opposite meanings; 'selfish' is the opposite of 'generous'."),
            ],
            [
                q("What is the purpose of a thesis statement?", ["To state the main claim of an essay", "To list the sources used", "To describe the setting", "To end the essay with a question"], 0,
                  "The thesis tells the reader the essay's central claim."),
                q("Which literary device gives human qualities to non-human things?", ["Alliteration", "Hyperbole", "Personification", "Onomatopoeia"], 2,
                  "Personification describes objects or animals as if they were people."),
                q("Which is the strongest evidence for a claim in an argumentative essay?", ["A personal opinion", "A statistic from a reliable source", "A rhetorical question", "A vague generalization"], 1,
                  "Facts from reliable sources give the most convincing support."),
                q("What is foreshadowing?", ["A flashback to earlier events", "A description of the setting", "A conversation between characters", "A hint about what will happen later"], 3,
                  "Foreshadowing gives clues about future events in the story."),
                q("Which sentence uses a semicolon correctly?", ["I wanted to go; but it rained.", "I studied hard; I passed the test.", "She bought; apples and pears.", "We left; because it was late."], 1,
                  "A semicolon joins two closely related independent clauses."),
            ],
        ],
        // high school
        [
            [
                q("What is the climax of a narrative?", ["The turning point of greatest tension", "The introduction of the characters", "The resolution of the conflict", "The background information"], 0,
                  "The climax is the moment of highest tension where the conflict turns."),
                q("What is the function of a topic sentence?", ["To cite a source", "To introduce the main idea of a paragraph", "To conclude the essay", "To provide a counterargument"], 1,
                  "A topic sentence states what the paragraph will discuss."),
                q("Which type of irony occurs when the audience knows something a character does not?", ["Verbal irony", "Situational irony", "Dramatic irony", "Cosmic irony"], 2,
                  "Dramatic irony depends on the audience knowing more than the characters."),
                q("What does 'tone' refer to in a text?", ["The length of the text", "The plot structure", "The main character", "The author's attitude toward the subject"], 3,
                  "Tone is the attitude conveyed through the author's word choice."),
                q("Which transition best signals a contrast?", ["Furthermore", "However", "Similarly", "In addition"], 1,
                  "'However' introduces an opposing or contrasting idea."),
            ],
            [
                q("Which rhetorical appeal relies on logic and evidence?", ["Ethos", "Pathos", "Logos", "Kairos"], 2,
                  "Logos appeals to reason through facts and logic."),
                q("What is the purpose of a counterargument in a persuasive essay?", ["To address and refute opposing views", "To repeat the thesis", "To introduce a new topic", "To summarize the sources"], 0,
                  "Answering opposing views strengthens the writer's position."),
                q("Which source is most credible for a research paper?", ["An anonymous blog post", "A peer-reviewed journal article", "A social media comment", "An advertisement"], 1,
                  "Peer-reviewed articles are checked by experts before publication."),
                q("What is an allusion?", ["An exaggeration for effect", "A comparison using 'like' or 'as'", "A repeated consonant sound", "A reference to a well-known person, place or work"], 3,
                  "An allusion refers to something the reader is expected to recognize."),
                q("What does it mean to paraphrase a source?", ["Copy the text word for word", "Restate the ideas in your own words with a citation", "Summarize only the title", "Ignore the author's main point"], 1,
                  "Paraphrasing restates ideas in new words and still credits the source."),
            ],
        ],
    ],
};
