// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Animal keyword heuristic
//!
//! A static list of lowercase substrings used to flag whether a predicted
//! label names an animal. Matching is deliberately loose: any keyword
//! occurring anywhere inside the lowercased label counts, so "cat" also
//! matches "catamaran". The list covers ImageNet's animal vocabulary plus
//! common dog and cat breed names.

/// Keywords checked against predicted labels by [`is_animal`]
pub static ANIMAL_KEYWORDS: &[&str] = &[
    "dog", "cat", "bird", "fish", "snake", "lizard", "spider", "insect",
    "mammal", "primate", "rodent", "ungulate", "carnivore", "bear",
    "elephant", "whale", "dolphin", "shark", "frog", "toad", "turtle",
    "crocodile", "alligator", "dinosaur", "butterfly", "moth", "bee",
    "ant", "beetle", "crab", "lobster", "snail", "slug", "shell",
    "monkey", "ape", "gorilla", "chimpanzee", "orangutan", "baboon",
    "macaque", "lemur", "gibbon", "marmoset", "tamarin", "squirrel",
    "beaver", "porcupine", "hamster", "guinea_pig", "mouse", "rat",
    "rabbit", "hare", "deer", "elk", "moose", "antelope", "gazelle",
    "giraffe", "camel", "llama", "alpaca", "pig", "boar", "hippo",
    "rhino", "horse", "zebra", "donkey", "mule", "cow", "ox", "bull",
    "sheep", "goat", "bison", "buffalo", "lion", "tiger", "leopard",
    "cheetah", "jaguar", "panther", "cougar", "lynx", "wolf", "fox",
    "coyote", "jackal", "hyena", "badger", "otter", "skunk", "raccoon",
    "panda", "koala", "kangaroo", "wallaby", "wombat", "possum",
    "platypus", "echidna", "armadillo", "sloth", "anteater", "bat",
    "seal", "walrus", "penguin", "ostrich", "emu", "cassowary", "kiwi",
    "eagle", "hawk", "falcon", "owl", "parrot", "macaw", "cockatoo",
    "toucan", "hummingbird", "woodpecker", "kingfisher", "swan", "goose",
    "duck", "chicken", "turkey", "peacock", "pheasant", "pigeon", "dove",
    "crane", "heron", "stork", "flamingo", "pelican", "gull", "tern",
    "puffin", "albatross", "petrel", "rottweiler", "terrier",
    "retriever", "spaniel", "shepherd", "collie", "hound", "mastiff",
    "setter", "pointer", "bulldog", "poodle", "tabby", "siamese", "persian",
    "sphynx", "maine coon", "bengal", "beagle", "boxer", "chihuahua",
    "dachshund", "dalmatian", "great dane", "husky", "malamute", "pug",
    "shih tzu", "corgi", "pomeranian", "maltese", "yorkshire", "labrador",
    "golden retriever", "german shepherd", "doberman", "schnauzer",
    "kitten", "puppy", "feline", "canine",
];

/// Check whether a predicted label names an animal
///
/// The label is lowercased and underscores are replaced with spaces
/// before the substring check, so both "Golden_Retriever" and
/// "golden retriever" match.
pub fn is_animal(label: &str) -> bool {
    let label_lower = label.to_lowercase().replace('_', " ");
    ANIMAL_KEYWORDS
        .iter()
        .any(|keyword| label_lower.contains(keyword))
}
