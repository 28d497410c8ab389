//! Compiled-in catalog content.

use crate::{Category, ContentItem};

pub static GAMES: [ContentItem; 12] = [
    ContentItem {
        id: 1,
        title: "God of War",
        image_url: "https://via.placeholder.com/300x450/3498db/ffffff?text=God+of+War",
        description: "An action-adventure game that follows Kratos, a former Greek god, as he journeys with his son in the realm of Norse gods.",
        rating: 9.5,
        category: Category::Game,
    },
    ContentItem {
        id: 2,
        title: "The Last of Us Part II",
        image_url: "https://via.placeholder.com/300x450/2ecc71/ffffff?text=Last+of+Us+II",
        description: "A post-apocalyptic action-adventure game focusing on the journey of Ellie and her quest for vengeance.",
        rating: 9.3,
        category: Category::Game,
    },
    ContentItem {
        id: 3,
        title: "Elden Ring",
        image_url: "https://via.placeholder.com/300x450/e74c3c/ffffff?text=Elden+Ring",
        description: "An action RPG set in a fantasy open world filled with danger and adventure.",
        rating: 9.7,
        category: Category::Game,
    },
    ContentItem {
        id: 4,
        title: "Cyberpunk 2077",
        image_url: "https://via.placeholder.com/300x450/f39c12/ffffff?text=Cyberpunk+2077",
        description: "An open-world action-adventure RPG set in a dystopian future where body modification is the norm.",
        rating: 8.5,
        category: Category::Game,
    },
    ContentItem {
        id: 5,
        title: "Red Dead Redemption 2",
        image_url: "https://via.placeholder.com/300x450/9b59b6/ffffff?text=RDR2",
        description: "An epic tale of life in America's unforgiving heartland, following outlaw Arthur Morgan.",
        rating: 9.6,
        category: Category::Game,
    },
    ContentItem {
        id: 6,
        title: "The Witcher 3",
        image_url: "https://via.placeholder.com/300x450/34495e/ffffff?text=Witcher+3",
        description: "A story-driven, open world RPG set in a visually stunning fantasy universe full of meaningful choices.",
        rating: 9.8,
        category: Category::Game,
    },
    ContentItem {
        id: 7,
        title: "Horizon Zero Dawn",
        image_url: "https://via.placeholder.com/300x450/16a085/ffffff?text=Horizon",
        description: "An exhilarating action RPG where you play as Aloy, a hunter in a world overrun by machines.",
        rating: 9.2,
        category: Category::Game,
    },
    ContentItem {
        id: 8,
        title: "Ghost of Tsushima",
        image_url: "https://via.placeholder.com/300x450/d35400/ffffff?text=Ghost+of+Tsushima",
        description: "An open-world action-adventure game set in feudal Japan, where you play as a samurai warrior.",
        rating: 9.4,
        category: Category::Game,
    },
    ContentItem {
        id: 9,
        title: "Hades",
        image_url: "https://via.placeholder.com/300x450/8e44ad/ffffff?text=Hades",
        description: "A rogue-like dungeon crawler where you defy the god of the dead as you hack and slash out of the Underworld.",
        rating: 9.1,
        category: Category::Game,
    },
    ContentItem {
        id: 10,
        title: "Death Stranding",
        image_url: "https://via.placeholder.com/300x450/2c3e50/ffffff?text=Death+Stranding",
        description: "An action game set in an apocalyptic United States, where you play as a courier delivering supplies to isolated colonies.",
        rating: 8.8,
        category: Category::Game,
    },
    ContentItem {
        id: 11,
        title: "Control",
        image_url: "https://via.placeholder.com/300x450/c0392b/ffffff?text=Control",
        description: "A supernatural third-person action-adventure game where you battle a deadly enemy known only as the Hiss.",
        rating: 8.9,
        category: Category::Game,
    },
    ContentItem {
        id: 12,
        title: "Sekiro: Shadows Die Twice",
        image_url: "https://via.placeholder.com/300x450/27ae60/ffffff?text=Sekiro",
        description: "An action-adventure game that follows a shinobi known as Wolf as he attempts to take revenge on a samurai clan.",
        rating: 9.0,
        category: Category::Game,
    },
];

pub static MOVIES: [ContentItem; 12] = [
    ContentItem {
        id: 1,
        title: "Inception",
        image_url: "https://via.placeholder.com/300x450/3498db/ffffff?text=Inception",
        description: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        rating: 8.8,
        category: Category::Movie,
    },
    ContentItem {
        id: 2,
        title: "The Dark Knight",
        image_url: "https://via.placeholder.com/300x450/2ecc71/ffffff?text=Dark+Knight",
        description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
        rating: 9.0,
        category: Category::Movie,
    },
    ContentItem {
        id: 3,
        title: "Pulp Fiction",
        image_url: "https://via.placeholder.com/300x450/e74c3c/ffffff?text=Pulp+Fiction",
        description: "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
        rating: 8.9,
        category: Category::Movie,
    },
    ContentItem {
        id: 4,
        title: "The Godfather",
        image_url: "https://via.placeholder.com/300x450/f39c12/ffffff?text=Godfather",
        description: "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
        rating: 9.2,
        category: Category::Movie,
    },
    ContentItem {
        id: 5,
        title: "Interstellar",
        image_url: "https://via.placeholder.com/300x450/9b59b6/ffffff?text=Interstellar",
        description: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        rating: 8.6,
        category: Category::Movie,
    },
    ContentItem {
        id: 6,
        title: "The Matrix",
        image_url: "https://via.placeholder.com/300x450/34495e/ffffff?text=Matrix",
        description: "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
        rating: 8.7,
        category: Category::Movie,
    },
    ContentItem {
        id: 7,
        title: "Parasite",
        image_url: "https://via.placeholder.com/300x450/16a085/ffffff?text=Parasite",
        description: "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.",
        rating: 8.6,
        category: Category::Movie,
    },
    ContentItem {
        id: 8,
        title: "Joker",
        image_url: "https://via.placeholder.com/300x450/d35400/ffffff?text=Joker",
        description: "In Gotham City, mentally troubled comedian Arthur Fleck is disregarded and mistreated by society. He then embarks on a downward spiral of revolution and bloody crime.",
        rating: 8.4,
        category: Category::Movie,
    },
    ContentItem {
        id: 9,
        title: "The Shawshank Redemption",
        image_url: "https://via.placeholder.com/300x450/8e44ad/ffffff?text=Shawshank",
        description: "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        rating: 9.3,
        category: Category::Movie,
    },
    ContentItem {
        id: 10,
        title: "Avengers: Endgame",
        image_url: "https://via.placeholder.com/300x450/2c3e50/ffffff?text=Endgame",
        description: "After the devastating events of Infinity War, the universe is in ruins. With the help of remaining allies, the Avengers assemble once more to reverse Thanos' actions.",
        rating: 8.4,
        category: Category::Movie,
    },
    ContentItem {
        id: 11,
        title: "The Lord of the Rings: The Return of the King",
        image_url: "https://via.placeholder.com/300x450/c0392b/ffffff?text=LOTR",
        description: "Gandalf and Aragorn lead the World of Men against Sauron's army to draw his gaze from Frodo and Sam as they approach Mount Doom with the One Ring.",
        rating: 8.9,
        category: Category::Movie,
    },
    ContentItem {
        id: 12,
        title: "Fight Club",
        image_url: "https://via.placeholder.com/300x450/27ae60/ffffff?text=Fight+Club",
        description: "An insomniac office worker and a devil-may-care soapmaker form an underground fight club that evolves into something much, much more.",
        rating: 8.8,
        category: Category::Movie,
    },
];

pub static WEB_SERIES: [ContentItem; 12] = [
    ContentItem {
        id: 1,
        title: "Breaking Bad",
        image_url: "https://via.placeholder.com/300x450/3498db/ffffff?text=Breaking+Bad",
        description: "A high school chemistry teacher diagnosed with inoperable lung cancer turns to manufacturing and selling methamphetamine to secure his family's future.",
        rating: 9.5,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 2,
        title: "Game of Thrones",
        image_url: "https://via.placeholder.com/300x450/2ecc71/ffffff?text=Game+of+Thrones",
        description: "Nine noble families fight for control over the lands of Westeros, while an ancient enemy returns after being dormant for millennia.",
        rating: 9.3,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 3,
        title: "Stranger Things",
        image_url: "https://via.placeholder.com/300x450/e74c3c/ffffff?text=Stranger+Things",
        description: "When a young boy disappears, his mother, a police chief, and his friends must confront terrifying supernatural forces in order to get him back.",
        rating: 8.7,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 4,
        title: "The Mandalorian",
        image_url: "https://via.placeholder.com/300x450/f39c12/ffffff?text=Mandalorian",
        description: "The travels of a lone bounty hunter in the outer reaches of the galaxy, far from the authority of the New Republic.",
        rating: 8.8,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 5,
        title: "The Office",
        image_url: "https://via.placeholder.com/300x450/9b59b6/ffffff?text=The+Office",
        description: "A mockumentary on a group of typical office workers, where the workday consists of ego clashes, inappropriate behavior, and tedium.",
        rating: 8.9,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 6,
        title: "Friends",
        image_url: "https://via.placeholder.com/300x450/34495e/ffffff?text=Friends",
        description: "Follows the personal and professional lives of six twenty to thirty-something-year-old friends living in Manhattan.",
        rating: 8.5,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 7,
        title: "The Crown",
        image_url: "https://via.placeholder.com/300x450/16a085/ffffff?text=The+Crown",
        description: "Follows the political rivalries and romance of Queen Elizabeth II's reign and the events that shaped the second half of the twentieth century.",
        rating: 8.7,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 8,
        title: "Black Mirror",
        image_url: "https://via.placeholder.com/300x450/d35400/ffffff?text=Black+Mirror",
        description: "An anthology series exploring a twisted, high-tech multiverse where humanity's greatest innovations and darkest instincts collide.",
        rating: 8.8,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 9,
        title: "The Witcher",
        image_url: "https://via.placeholder.com/300x450/8e44ad/ffffff?text=The+Witcher",
        description: "Geralt of Rivia, a solitary monster hunter, struggles to find his place in a world where people often prove more wicked than beasts.",
        rating: 8.2,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 10,
        title: "Money Heist",
        image_url: "https://via.placeholder.com/300x450/2c3e50/ffffff?text=Money+Heist",
        description: "An unusual group of robbers attempt to carry out the most perfect robbery in Spanish history - stealing 2.4 billion euros from the Royal Mint of Spain.",
        rating: 8.3,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 11,
        title: "The Queen's Gambit",
        image_url: "https://via.placeholder.com/300x450/c0392b/ffffff?text=Queens+Gambit",
        description: "Orphaned at the tender age of nine, prodigious introvert Beth Harmon discovers and masters the game of chess in 1960s USA. But child stardom comes at a price.",
        rating: 8.6,
        category: Category::WebSeries,
    },
    ContentItem {
        id: 12,
        title: "Westworld",
        image_url: "https://via.placeholder.com/300x450/27ae60/ffffff?text=Westworld",
        description: "At the intersection of the near future and the reimagined past, waits a world in which every human appetite can be indulged without consequence.",
        rating: 8.6,
        category: Category::WebSeries,
    },
];
/// Titles offered by the header search box. Deliberately not derived from the
/// catalog lists above.
pub static SEARCH_TITLES: [&str; 30] = [
    "God of War",
    "The Last of Us",
    "Elden Ring",
    "Cyberpunk 2077",
    "Red Dead Redemption 2",
    "The Witcher 3",
    "Horizon Zero Dawn",
    "Fortnite",
    "Call of Duty",
    "Minecraft",
    "Inception",
    "The Dark Knight",
    "Avengers: Endgame",
    "Pulp Fiction",
    "The Godfather",
    "Interstellar",
    "The Matrix",
    "Parasite",
    "Joker",
    "The Shawshank Redemption",
    "Breaking Bad",
    "Game of Thrones",
    "Stranger Things",
    "The Mandalorian",
    "The Office",
    "Friends",
    "The Crown",
    "Black Mirror",
    "The Witcher",
    "Money Heist",
];
