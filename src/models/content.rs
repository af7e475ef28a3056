//! Static page content and the small bits of UI logic around it.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

pub const FOUNDED: i32 = 1999;
pub const AGENCY: &str = "R&A Comunicação Visual";
pub const EMAIL: &str = "agenciaracomunicacaovisual@gmail.com";
pub const PHONE: &str = "(13) 99806-1936";
pub const ADDRESS: &str = "São Vicente, São Paulo - Brasil";
pub const OPENING_HOURS: &str = "Segunda à Sexta: 9h às 18h";
pub const SATISFIED_CLIENTS: u32 = 23;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn years_since_founding(year: i32) -> i32 {
    (year - FOUNDED).max(0)
}

/// In-page anchors the navigation can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Home,
    About,
    Services,
    Impact,
    Portfolio,
    Contact,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Impact => "impact",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: Section,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", section: Section::Home },
    NavLink { label: "Sobre", section: Section::About },
    NavLink { label: "Serviços", section: Section::Services },
    NavLink { label: "Impacto", section: Section::Impact },
    NavLink { label: "Contato", section: Section::Contact },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Home", section: Section::Home },
    NavLink { label: "Sobre", section: Section::About },
    NavLink { label: "Serviços", section: Section::Services },
    NavLink { label: "Portfólio", section: Section::Portfolio },
    NavLink { label: "Impacto Social", section: Section::Impact },
    NavLink { label: "Contato", section: Section::Contact },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Accent colour, CSS hex.
    pub color: &'static str,
    pub delay_ms: u64,
}

pub const SERVICES: &[Card] = &[
    Card {
        title: "Painéis Publicitários",
        description: "Painéis estrategicamente posicionados em áreas de alta visibilidade para maximizar o impacto da sua marca.",
        icon: "🖥",
        color: "#2563EB",
        delay_ms: 100,
    },
    Card {
        title: "Eventos e Feiras",
        description: "Soluções visuais completas para destacar sua marca em eventos, feiras e exposições.",
        icon: "📅",
        color: "#2563EB",
        delay_ms: 200,
    },
    Card {
        title: "Campanhas Criativas",
        description: "Desenvolvimento de campanhas visuais criativas e impactantes que traduzem a essência da sua marca.",
        icon: "💡",
        color: "#2563EB",
        delay_ms: 300,
    },
    Card {
        title: "Comunicação Social",
        description: "Integração de mensagens de utilidade pública com valores corporativos para criar impacto positivo.",
        icon: "👥",
        color: "#2563EB",
        delay_ms: 400,
    },
];

pub const OUTDOOR_HIGHLIGHTS: &[&str] = &[
    "Análise estratégica de locais de alto tráfego",
    "Design personalizado para sua marca",
    "Manutenção e atualização regular",
    "Relatórios de visibilidade e impacto",
];

pub const IMPACT: &[Card] = &[
    Card {
        title: "Educação Ambiental",
        description: "Promovemos conteúdos educativos sobre sustentabilidade e proteção ambiental em nossos painéis publicitários.",
        icon: "🍃",
        color: "#10B981",
        delay_ms: 100,
    },
    Card {
        title: "Responsabilidade Social",
        description: "Conectamos valores corporativos a causas sociais relevantes, gerando valor tanto para marcas quanto para a comunidade.",
        icon: "♥",
        color: "#EF4444",
        delay_ms: 200,
    },
    Card {
        title: "Mensagens de Utilidade Pública",
        description: "Reservamos espaço em nossas mídias para campanhas de conscientização e informações de utilidade pública.",
        icon: "🌐",
        color: "#3B82F6",
        delay_ms: 300,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Outdoor,
    Events,
    Social,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::All, Category::Outdoor, Category::Events, Category::Social];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Todos",
            Category::Outdoor => "Outdoor",
            Category::Events => "Eventos",
            Category::Social => "Social",
        }
    }

    pub fn includes(&self, project: &Project) -> bool {
        *self == Category::All || *self == project.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
}

const PROJECT_IMAGE: &str = "/image/indalecio2.png";

pub const PROJECTS: &[Project] = &[
    Project { id: 1, title: "Painéis em Avenidas Principais", category: Category::Outdoor, image: PROJECT_IMAGE },
    Project { id: 2, title: "Comunicação Visual para Eventos", category: Category::Events, image: PROJECT_IMAGE },
    Project { id: 3, title: "Campanhas de Conscientização", category: Category::Social, image: PROJECT_IMAGE },
    Project { id: 4, title: "Mídia em Locais Estratégicos", category: Category::Outdoor, image: PROJECT_IMAGE },
    Project { id: 5, title: "Feiras e Exposições", category: Category::Events, image: PROJECT_IMAGE },
    Project { id: 6, title: "Campanhas Ambientais", category: Category::Social, image: PROJECT_IMAGE },
];

pub fn projects_in(category: Category) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|project| category.includes(project)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub const MAX_RATING: u8 = 5;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "John Doe",
        position: "CEO",
        company: "Tech Corp",
        text: "Arrocha",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Erik Medeiros",
        position: "Desenvolvedor Full Stack",
        company: "GBM",
        text: "Vapo.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Kallani Fernandes",
        position: "Jiu-Jiteiro",
        company: "UNISANTA",
        text: "Vamo soltinho?",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

/// Active slide of a wrapping carousel, plus the way it last moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    direction: Direction,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            direction: Direction::Right,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Right;
        self.active = (self.active + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Left;
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.direction = if index > self.active {
            Direction::Right
        } else {
            Direction::Left
        };
        self.active = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_projects_by_category() {
        assert_eq!(projects_in(Category::All).len(), PROJECTS.len());
        let outdoor: Vec<u32> = projects_in(Category::Outdoor).iter().map(|p| p.id).collect();
        assert_eq!(outdoor, vec![1, 4]);
        assert!(projects_in(Category::Social)
            .iter()
            .all(|p| p.category == Category::Social));
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.active(), 2);
        assert_eq!(carousel.direction(), Direction::Left);
        carousel.next();
        assert_eq!(carousel.active(), 0);
        assert_eq!(carousel.direction(), Direction::Right);
    }

    #[test]
    fn carousel_jump_sets_direction() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(2);
        assert_eq!((carousel.active(), carousel.direction()), (2, Direction::Right));
        carousel.go_to(1);
        assert_eq!((carousel.active(), carousel.direction()), (1, Direction::Left));
        carousel.go_to(7);
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn years_since_founding_never_negative() {
        assert_eq!(years_since_founding(2025), 26);
        assert_eq!(years_since_founding(1990), 0);
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<&str> = FOOTER_LINKS.iter().map(|l| l.section.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FOOTER_LINKS.len());
    }
}
