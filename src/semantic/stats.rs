use std::fmt::{Display, Write};

/// Construct counts gathered during the validation walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub declarations: usize,
    pub functions: usize,
    pub ifs: usize,
    pub whiles: usize,
    pub fors: usize,
    pub assignments: usize,
    pub nodes: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn control_structures(&self) -> usize {
        self.ifs + self.whiles + self.fors
    }

    pub fn loops(&self) -> usize {
        self.whiles + self.fors
    }

    /// The boxed statistics report printed after a clean analysis.
    pub fn report(&self) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "         ESTADÍSTICAS DEL CÓDIGO");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "  Declaraciones:          {}", self.declarations);
        let _ = writeln!(out, "  Funciones:              {}", self.functions);
        let _ = writeln!(out, "  Estructuras if:         {}", self.ifs);
        let _ = writeln!(out, "  Bucles while:           {}", self.whiles);
        let _ = writeln!(out, "  Bucles for:             {}", self.fors);
        let _ = writeln!(out, "  Asignaciones:           {}", self.assignments);
        let _ = writeln!(out, "  Nodos visitados:        {}", self.nodes);
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(
            out,
            "  Total estructuras control: {}",
            self.control_structures()
        );
        let _ = writeln!(out, "  Total bucles:             {}", self.loops());
        let _ = write!(out, "{}", rule);

        out
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Se hicieron {} declaraciones", self.declarations)?;
        writeln!(f, "Se reconocieron {} funciones", self.functions)?;
        writeln!(f, "Se reconocieron {} bucles while", self.whiles)?;
        writeln!(f, "Se reconocieron {} bucles for", self.fors)?;
        writeln!(f, "Se reconocieron {} estructuras if", self.ifs)?;
        write!(f, "Se visitaron {} nodos", self.nodes)
    }
}
