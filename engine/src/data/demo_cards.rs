// Demo fixtures for local development
use shared::models::{CardData, Outcome, Position, PositionStatus, Side};
use shared::providers::ProviderKey;

const PLACEHOLDER_IMAGE: &str = "/placeholder_img.png";

struct DemoCard {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    provider: ProviderKey,
    liquidity: &'static str,
    created_date: &'static str,
    yes: f64,
    no: f64,
    category: &'static str,
    position: (PositionStatus, Side, &'static str, &'static str, &'static str, &'static str),
    outcomes: &'static [(&'static str, f64, &'static str)],
}

impl DemoCard {
    fn to_card(&self) -> CardData {
        let (status, side, size, sold, remaining, pnl) = self.position;
        CardData {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            provider: self.provider,
            liquidity: self.liquidity.to_string(),
            created_date: self.created_date.to_string(),
            image_url: Some(PLACEHOLDER_IMAGE.to_string()),
            yes_percentage: self.yes,
            no_percentage: self.no,
            volume: None,
            category: Some(self.category.to_string()),
            end_date: None,
            sparkline: None,
            outcomes: Some(
                self.outcomes
                    .iter()
                    .map(|(label, probability, volume)| Outcome {
                        label: label.to_string(),
                        probability: *probability,
                        volume: Some(volume.to_string()),
                    })
                    .collect(),
            ),
            position: Some(Position {
                status,
                side,
                size: size.to_string(),
                sold: sold.to_string(),
                remaining: remaining.to_string(),
                pnl: pnl.to_string(),
            }),
        }
    }
}

/// The demo market cards, in display order.
pub fn demo_cards() -> Vec<CardData> {
    DEMO_CARDS.iter().map(DemoCard::to_card).collect()
}

const DEMO_CARDS: &[DemoCard] = &[
    DemoCard {
        id: "1",
        title: "US inflation below 3% by Dec 2025?",
        description: "Will YoY CPI fall under 3% by December 2025?",
        provider: ProviderKey::Kalshi,
        liquidity: "$2.3M",
        created_date: "05 Feb, 2025",
        yes: 42.0,
        no: 58.0,
        category: "Economy",
        position: (PositionStatus::Active, Side::Sell, "1,580¢", "1,000¢", "580¢", "-15.83%"),
        outcomes: &[
            ("50+ bps decreased", 42.0, "$20,660,050"),
            ("25 bps decrease", 15.8, "$20,660,050"),
            ("No change", 4.5, "$20,660,050"),
        ],
    },
    DemoCard {
        id: "2",
        title: "Bitcoin tops $100k in 2025",
        description: "Will BTC reach a six-figure price before 2026?",
        provider: ProviderKey::Manifold,
        liquidity: "$850k",
        created_date: "12 Mar, 2025",
        yes: 61.0,
        no: 39.0,
        category: "Crypto",
        position: (PositionStatus::Active, Side::Buy, "2,340¢", "800¢", "1,540¢", "+155.83%"),
        outcomes: &[
            ("50+ bps decreased", 61.0, "$12,100,000"),
            ("25 bps decrease", 22.4, "$12,100,000"),
            ("No change", 7.2, "$12,100,000"),
        ],
    },
    DemoCard {
        id: "3",
        title: "AR headset unveiled at WWDC 2026",
        description: "Will Apple unveil an AR headset at WWDC 2026?",
        provider: ProviderKey::Limitless,
        liquidity: "$1.4M",
        created_date: "07 Jun, 2026",
        yes: 54.0,
        no: 46.0,
        category: "Tech",
        position: (PositionStatus::Active, Side::Buy, "900¢", "0¢", "900¢", "+22.10%"),
        outcomes: &[
            ("50+ bps decreased", 54.0, "$8,420,220"),
            ("25 bps decrease", 18.5, "$8,420,220"),
            ("No change", 6.1, "$8,420,220"),
        ],
    },
    DemoCard {
        id: "4",
        title: "US election 2028: Incumbent reelected?",
        description: "Will the sitting president win reelection in 2028?",
        provider: ProviderKey::Kalshi,
        liquidity: "$3.1M",
        created_date: "22 Sep, 2025",
        yes: 48.0,
        no: 52.0,
        category: "Politics",
        position: (PositionStatus::History, Side::Sell, "1,200¢", "1,200¢", "0¢", "+12.44%"),
        outcomes: &[
            ("50+ bps decreased", 48.0, "$9,200,000"),
            ("25 bps decrease", 19.3, "$9,200,000"),
            ("No change", 5.0, "$9,200,000"),
        ],
    },
    DemoCard {
        id: "5",
        title: "Global temperature record in 2026",
        description: "Will 2026 set a new global average temperature record?",
        provider: ProviderKey::Limitless,
        liquidity: "$420k",
        created_date: "14 Aug, 2025",
        yes: 67.0,
        no: 33.0,
        category: "Climate",
        position: (PositionStatus::History, Side::Buy, "1,000¢", "1,000¢", "0¢", "-8.10%"),
        outcomes: &[
            ("50+ bps decreased", 67.0, "$2,420,000"),
            ("25 bps decrease", 14.2, "$2,420,000"),
            ("No change", 3.7, "$2,420,000"),
        ],
    },
    DemoCard {
        id: "6",
        title: "ETH surpasses BTC market cap by 2030",
        description: "Will Ethereum flip Bitcoin by total market capitalization by 2030?",
        provider: ProviderKey::Polymarket,
        liquidity: "$980k",
        created_date: "03 Nov, 2024",
        yes: 18.0,
        no: 82.0,
        category: "Crypto",
        position: (PositionStatus::Active, Side::Sell, "3,100¢", "1,400¢", "1,700¢", "-4.10%"),
        outcomes: &[
            ("50+ bps decreased", 18.0, "$980,000"),
            ("25 bps decrease", 9.8, "$980,000"),
            ("No change", 2.4, "$980,000"),
        ],
    },
    DemoCard {
        id: "7",
        title: "AI passes Turing-style benchmark by 2027",
        description: "Will a leading AI system pass a rigorous Turing-style test?",
        provider: ProviderKey::Predictit,
        liquidity: "$1.9M",
        created_date: "30 May, 2025",
        yes: 36.0,
        no: 64.0,
        category: "Science",
        position: (PositionStatus::History, Side::Buy, "760¢", "760¢", "0¢", "+3.22%"),
        outcomes: &[
            ("50+ bps decreased", 36.0, "$1,900,000"),
            ("25 bps decrease", 12.2, "$1,900,000"),
            ("No change", 5.9, "$1,900,000"),
        ],
    },
    DemoCard {
        id: "8",
        title: "Man City win Premier League 2026/27",
        description: "Will Manchester City lift the 2026/27 Premier League title?",
        provider: ProviderKey::Zeitgeist,
        liquidity: "$760k",
        created_date: "09 Jan, 2026",
        yes: 58.0,
        no: 42.0,
        category: "Sports",
        position: (PositionStatus::Active, Side::Buy, "1,420¢", "600¢", "820¢", "+8.90%"),
        outcomes: &[
            ("50+ bps decreased", 58.0, "$760,000"),
            ("25 bps decrease", 16.4, "$760,000"),
            ("No change", 6.8, "$760,000"),
        ],
    },
];
