//! Visual theme catalog.
//!
//! The selected theme is the only state that survives a reload. It is stored
//! as its id under [`STORAGE_KEY`] and applied as a `theme-<id>` class on the
//! document root.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the theme id.
pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Cyberpunk,
    Hq,
    Halloween,
    Natal,
    Floral,
    Matrix,
    Valentine,
}

impl Theme {
    pub const ALL: [Self; 7] =
        [Self::Cyberpunk, Self::Hq, Self::Halloween, Self::Natal, Self::Floral, Self::Matrix, Self::Valentine];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Cyberpunk => "cyberpunk",
            Self::Hq => "hq",
            Self::Halloween => "halloween",
            Self::Natal => "natal",
            Self::Floral => "floral",
            Self::Matrix => "matrix",
            Self::Valentine => "valentine",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.id() == id)
    }

    /// Resolve a stored id, falling back to the default for missing or unknown values.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored.and_then(Self::from_id).unwrap_or_default()
    }

    /// Class applied to `<html>`.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("theme-{}", self.id())
    }

    /// The comic theme draws hard offset outlines instead of neon glows.
    #[must_use]
    pub fn uses_ink_outline(self) -> bool {
        self == Self::Hq
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cyberpunk => "Cyberpunk",
            Self::Hq => "HQ (Quadrinhos)",
            Self::Halloween => "Halloween",
            Self::Natal => "Natal",
            Self::Floral => "Floral",
            Self::Matrix => "Matrix",
            Self::Valentine => "Valentine's Day",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Cyberpunk => {
                "Um mergulho em um futuro distópico onde a tecnologia e a cultura digital se encontram. O Cyberpunk traz uma sensação de submundo futurista, repleto de caos e inovação."
            }
            Self::Hq => {
                "Um tributo aos clássicos das histórias em quadrinhos, com bordas grossas e contornos nítidos, trazendo um contraste dramático e uma estética visual vibrante."
            }
            Self::Halloween => {
                "Um tema sombrio e misterioso, perfeito para capturar a essência do Halloween. Com uma vibração assustadora, é envolvente e divertido, trazendo a atmosfera de uma noite de sustos."
            }
            Self::Natal => {
                "Mágico, festivo e acolhedor, o tema de Natal traz à tona toda a alegria e o espírito de celebração dessa época especial."
            }
            Self::Floral => {
                "Leve, delicado e natural, o tema Floral celebra a beleza das flores e da natureza, com uma paleta suave e acolhedora."
            }
            Self::Matrix => {
                "Inspirado no filme Matrix, este tema traz uma estética digital e futurista, com um visual de realidade simulada e códigos caindo como uma chuva verde."
            }
            Self::Valentine => {
                "Romântico, suave e delicado, o tema de Dia dos Namorados evoca emoções de carinho, amor e romance."
            }
        }
    }

    #[must_use]
    pub fn visual_elements(self) -> &'static str {
        match self {
            Self::Cyberpunk => {
                "Tons neon vibrantes como ciano elétrico, rosa profundo e roxo destacam-se contra um fundo azul-preto. Luzes de néon intensas, hologramas e grades metálicas criam uma atmosfera digital imersiva e vibrante."
            }
            Self::Hq => {
                "A base em preto e off-white é pontuada por toques de vermelho vibrante e azul clássico. Texturas de tinta, sombras dramáticas e balões de fala no estilo dos quadrinhos criam um visual dinâmico e impactante."
            }
            Self::Halloween => {
                "Roxos profundos e laranjas flamejantes dominam a paleta, com abóboras, fantasmas e teias de aranha. Iluminação baixa e efeitos de neblina criam um ar enigmático e festivo, mas sem desfoques."
            }
            Self::Natal => {
                "Verde floresta, vermelho festivo e dourado dominam a paleta. Árvores de Natal iluminadas, neve caindo, luzes cintilantes e presentes são evocados, com brilhos suaves que dão a sensação de um abraço caloroso."
            }
            Self::Floral => {
                "Tons pastéis de rosa, roxo suave e creme, acompanhados de padrões florais, folhagens delicadas e texturas orgânicas. O design é fluido, com bordas arredondadas e uma sensação de suavidade e frescor."
            }
            Self::Matrix => {
                "Preto absoluto e verde neon elétrico são as cores dominantes, com um padrão sutil de códigos digitais no fundo. Efeitos de glitch e gráficos digitais dão a sensação de estar imerso em uma realidade virtual."
            }
            Self::Valentine => {
                "A paleta é composta por tons de rosa choque vibrante, vermelho profundo e branco cremoso, com detalhes que simbolizam o amor. O design é suave, com bordas arredondadas e texturas delicadas que transmitem um toque de ternura."
            }
        }
    }

    #[must_use]
    pub fn applications(self) -> &'static str {
        match self {
            Self::Cyberpunk => {
                "Ideal para interfaces futurísticas, conceitos de realidade aumentada, jogos de ficção científica e realidade virtual, proporcionando uma sensação de estar no meio de um universo digital em constante evolução."
            }
            Self::Hq => {
                "Perfeito para temas de entretenimento, jogos de super-heróis, sites de comics ou animações, trazendo à tona a energia e o impacto visual dos quadrinhos."
            }
            Self::Halloween => {
                "Ideal para sites de festas, promoções de Halloween, lojas de decoração temática ou eventos de Halloween, onde o objetivo é criar um ambiente assustador e envolvente."
            }
            Self::Natal => {
                "Perfeito para e-commerces de Natal, sites de promoção de fim de ano, lojas online de presentes, ou interfaces que busquem evocar a alegria e festividade do Natal."
            }
            Self::Floral => {
                "Ideal para temas de primavera, bem-estar, saúde, ou qualquer interface que precise de uma energia calma, delicada e natural."
            }
            Self::Matrix => {
                "Ideal para interfaces tecnológicas, sites de ciência da computação, jogos de ação ou qualquer projeto digital que envolva inteligência artificial, universos virtuais ou simulações digitais."
            }
            Self::Valentine => {
                "Ideal para sites de namoro, promoções de Dia dos Namorados, presentes românticos, ou qualquer interface focada em relacionamentos, presentes especiais ou celebrações do amor."
            }
        }
    }
}
