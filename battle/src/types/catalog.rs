//! Kanto species table

use super::element::ElementType::{self, *};
use super::species::PowerTier::{self, *};

type Entry = (u16, &'static str, PowerTier, &'static [ElementType]);

#[rustfmt::skip]
pub(super) static KANTO: &[Entry] = &[
    (1, "Bulbasaur", Three, &[Grass, Poison]),
    (2, "Ivysaur", Four, &[Grass, Poison]),
    (3, "Venusaur", Six, &[Grass, Poison]),
    (4, "Charmander", Three, &[Fire]),
    (5, "Charmeleon", Four, &[Fire]),
    (6, "Charizard", Six, &[Fire, Flying]),
    (7, "Squirtle", Three, &[Water]),
    (8, "Wartortle", Four, &[Water]),
    (9, "Blastoise", Six, &[Water]),
    (10, "Caterpie", Three, &[Bug]),
    (11, "Metapod", Three, &[Bug]),
    (12, "Butterfree", Four, &[Bug, Flying]),
    (13, "Weedle", Three, &[Bug, Poison]),
    (14, "Kakuna", Three, &[Bug, Poison]),
    (15, "Beedrill", Four, &[Bug, Poison]),
    (16, "Pidgey", Three, &[Normal, Flying]),
    (17, "Pidgeotto", Four, &[Normal, Flying]),
    (18, "Pidgeot", Five, &[Normal, Flying]),
    (19, "Rattata", Three, &[Normal]),
    (20, "Raticate", Four, &[Normal]),
    (21, "Spearow", Three, &[Normal, Flying]),
    (22, "Fearow", Four, &[Normal, Flying]),
    (23, "Ekans", Three, &[Poison]),
    (24, "Arbok", Four, &[Poison]),
    (25, "Pikachu", Four, &[Electric]),
    (26, "Raichu", Five, &[Electric]),
    (27, "Sandshrew", Three, &[Ground]),
    (28, "Sandslash", Four, &[Ground]),
    (29, "Nidoran-F", Three, &[Poison]),
    (30, "Nidorina", Four, &[Poison]),
    (31, "Nidoqueen", Five, &[Poison, Ground]),
    (32, "Nidoran-M", Three, &[Poison]),
    (33, "Nidorino", Four, &[Poison]),
    (34, "Nidoking", Five, &[Poison, Ground]),
    (35, "Clefairy", Three, &[Normal]),
    (36, "Clefable", Five, &[Normal]),
    (37, "Vulpix", Three, &[Fire]),
    (38, "Ninetales", Five, &[Fire]),
    (39, "Jigglypuff", Three, &[Normal]),
    (40, "Wigglytuff", Four, &[Normal]),
    (41, "Zubat", Three, &[Poison, Flying]),
    (42, "Golbat", Four, &[Poison, Flying]),
    (43, "Oddish", Three, &[Grass, Poison]),
    (44, "Gloom", Four, &[Grass, Poison]),
    (45, "Vileplume", Five, &[Grass, Poison]),
    (46, "Paras", Three, &[Bug, Grass]),
    (47, "Parasect", Four, &[Bug, Grass]),
    (48, "Venonat", Three, &[Bug, Poison]),
    (49, "Venomoth", Four, &[Bug, Poison]),
    (50, "Diglett", Three, &[Ground]),
    (51, "Dugtrio", Four, &[Ground]),
    (52, "Meowth", Three, &[Normal]),
    (53, "Persian", Four, &[Normal]),
    (54, "Psyduck", Three, &[Water]),
    (55, "Golduck", Five, &[Water]),
    (56, "Mankey", Three, &[Fighting]),
    (57, "Primeape", Four, &[Fighting]),
    (58, "Growlithe", Four, &[Fire]),
    (59, "Arcanine", Eight, &[Fire]),
    (60, "Poliwag", Three, &[Water]),
    (61, "Poliwhirl", Four, &[Water]),
    (62, "Poliwrath", Six, &[Water, Fighting]),
    (63, "Abra", Three, &[Psychic]),
    (64, "Kadabra", Five, &[Psychic]),
    (65, "Alakazam", Eight, &[Psychic]),
    (66, "Machop", Three, &[Fighting]),
    (67, "Machoke", Four, &[Fighting]),
    (68, "Machamp", Eight, &[Fighting]),
    (69, "Bellsprout", Three, &[Grass, Poison]),
    (70, "Weepinbell", Four, &[Grass, Poison]),
    (71, "Victreebel", Five, &[Grass, Poison]),
    (72, "Tentacool", Three, &[Water, Poison]),
    (73, "Tentacruel", Five, &[Water, Poison]),
    (74, "Geodude", Three, &[Rock, Ground]),
    (75, "Graveler", Four, &[Rock, Ground]),
    (76, "Golem", Six, &[Rock, Ground]),
    (77, "Ponyta", Four, &[Fire]),
    (78, "Rapidash", Five, &[Fire]),
    (79, "Slowpoke", Three, &[Water, Psychic]),
    (80, "Slowbro", Five, &[Water, Psychic]),
    (81, "Magnemite", Three, &[Electric, Steel]),
    (82, "Magneton", Five, &[Electric, Steel]),
    (83, "Farfetch'd", Four, &[Normal, Flying]),
    (84, "Doduo", Three, &[Normal, Flying]),
    (85, "Dodrio", Five, &[Normal, Flying]),
    (86, "Seel", Three, &[Water]),
    (87, "Dewgong", Five, &[Water, Ice]),
    (88, "Grimer", Three, &[Poison]),
    (89, "Muk", Five, &[Poison]),
    (90, "Shellder", Three, &[Water]),
    (91, "Cloyster", Six, &[Water, Ice]),
    (92, "Gastly", Three, &[Ghost, Poison]),
    (93, "Haunter", Five, &[Ghost, Poison]),
    (94, "Gengar", Eight, &[Ghost, Poison]),
    (95, "Onix", Five, &[Rock, Ground]),
    (96, "Drowzee", Three, &[Psychic]),
    (97, "Hypno", Five, &[Psychic]),
    (98, "Krabby", Three, &[Water]),
    (99, "Kingler", Five, &[Water]),
    (100, "Voltorb", Three, &[Electric]),
    (101, "Electrode", Five, &[Electric]),
    (102, "Exeggcute", Three, &[Grass, Psychic]),
    (103, "Exeggutor", Six, &[Grass, Psychic]),
    (104, "Cubone", Three, &[Ground]),
    (105, "Marowak", Five, &[Ground]),
    (106, "Hitmonlee", Six, &[Fighting]),
    (107, "Hitmonchan", Six, &[Fighting]),
    (108, "Lickitung", Four, &[Normal]),
    (109, "Koffing", Three, &[Poison]),
    (110, "Weezing", Five, &[Poison]),
    (111, "Rhyhorn", Four, &[Ground, Rock]),
    (112, "Rhydon", Six, &[Ground, Rock]),
    (113, "Chansey", Six, &[Normal]),
    (114, "Tangela", Four, &[Grass]),
    (115, "Kangaskhan", Six, &[Normal]),
    (116, "Horsea", Three, &[Water]),
    (117, "Seadra", Five, &[Water]),
    (118, "Goldeen", Three, &[Water]),
    (119, "Seaking", Four, &[Water]),
    (120, "Staryu", Three, &[Water]),
    (121, "Starmie", Six, &[Water, Psychic]),
    (122, "Mr. Mime", Five, &[Psychic]),
    (123, "Scyther", Six, &[Bug, Flying]),
    (124, "Jynx", Five, &[Ice, Psychic]),
    (125, "Electabuzz", Six, &[Electric]),
    (126, "Magmar", Six, &[Fire]),
    (127, "Pinsir", Six, &[Bug]),
    (128, "Tauros", Six, &[Normal]),
    (129, "Magikarp", Three, &[Water]),
    (130, "Gyarados", Eight, &[Water, Flying]),
    (131, "Lapras", Eight, &[Water, Ice]),
    (132, "Ditto", Four, &[Normal]),
    (133, "Eevee", Four, &[Normal]),
    (134, "Vaporeon", Six, &[Water]),
    (135, "Jolteon", Six, &[Electric]),
    (136, "Flareon", Six, &[Fire]),
    (137, "Porygon", Five, &[Normal]),
    (138, "Omanyte", Four, &[Rock, Water]),
    (139, "Omastar", Six, &[Rock, Water]),
    (140, "Kabuto", Four, &[Rock, Water]),
    (141, "Kabutops", Six, &[Rock, Water]),
    (142, "Aerodactyl", Eight, &[Rock, Flying]),
    (143, "Snorlax", Eight, &[Normal]),
    (144, "Articuno", Ten, &[Ice, Flying]),
    (145, "Zapdos", Ten, &[Electric, Flying]),
    (146, "Moltres", Ten, &[Fire, Flying]),
    (147, "Dratini", Four, &[Dragon]),
    (148, "Dragonair", Six, &[Dragon]),
    (149, "Dragonite", Ten, &[Dragon, Flying]),
    (150, "Mewtwo", Ten, &[Psychic]),
    (151, "Mew", Ten, &[Psychic]),
];
