//! Fixed keyword table served by the local assistant.

/// Entries in lookup order. Keyword matching returns the first hit, so order matters.
const PT: &[(&str, &str)] = &[
    ("matematica basica", "Matemática básica: Conceitos fundamentais de adição, subtração, multiplicação e divisão."),
    ("calculo avancado", "Cálculo avançado: Estudo de derivadas (taxa de mudança) e integrais (acúmulo)."),
    ("fisica newtoniana", "Física newtoniana: Descreve o movimento de objetos macroscópicos com base em três leis."),
    ("biologia celular", "Biologia celular: Estudo da célula, a unidade fundamental da vida."),
    ("o que e blockchain", "Blockchain: Um registro distribuído e imutável de transações. Garante transparência e segurança."),
    ("quem e pele", "Pelé: 'O Rei do Futebol', considerado um dos maiores jogadores de todos os tempos."),
    ("quem e messi", "Lionel Messi: Jogador de futebol argentino, vencedor de diversas Bolas de Ouro."),
    ("quem e taylor swift", "Taylor Swift: Cantora e compositora americana, um ícone da cultura pop global."),
    ("qual a missao da aura tech", "A missão da Aura Technology é capacitar indivíduos e organizações com conhecimento técnico-científico de ponta e soluções inovadoras."),
    ("explique a auracoin", "A AuraCoin é a nossa criptomoeda nativa, projetada com um protocolo de consenso híbrido que une eficiência, segurança e sustentabilidade."),
    ("descreva a aurora ai", "Aurora AI é a nossa IA de ponta, construída com uma arquitetura neuromórfica que simula as redes neurais biológicas. Ela utiliza aprendizado federado para garantir privacidade e raciocínio híbrido."),
    ("futebol", "O futebol é o esporte mais popular do mundo, jogado entre duas equipes de 11 jogadores. Seu objetivo é marcar gols na baliza adversária."),
    ("celebridades", "Celebridades são figuras públicas de destaque na mídia. As tendências atuais mostram um aumento de interesse em celebridades que usam suas plataformas para causas sociais e ambientais."),
];

const EN: &[(&str, &str)] = &[
    ("basic mathematics", "Basic mathematics: Fundamental concepts of addition, subtraction, multiplication, and division."),
    ("what is blockchain", "Blockchain: A distributed and immutable ledger of transactions. It ensures transparency and security."),
];

/// Per-language question → answer table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeBase;

impl KnowledgeBase {
    pub fn entries(&self, language: &str) -> Option<&'static [(&'static str, &'static str)]> {
        match language {
            "pt" => Some(PT),
            "en" => Some(EN),
            _ => None,
        }
    }

    /// Exact question first, then the first key that appears in the prompt as a
    /// whole word or phrase. `prompt` must already be lowercased.
    pub fn lookup(&self, language: &str, prompt: &str) -> Option<&'static str> {
        let entries = self.entries(language)?;
        entries
            .iter()
            .find(|(key, _)| *key == prompt)
            .or_else(|| entries.iter().find(|(key, _)| contains_phrase(prompt, key)))
            .map(|(_, answer)| *answer)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True if `needle` occurs in `haystack` with no word character on either side.
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..].chars().next().map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}
