// ============================================================================
// CONTENT - Textos estáticos de cada página
// ============================================================================

use crate::router::ViewHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    /// Título de la página (también usado en document.title)
    pub title: &'static str,
    /// Texto del link en la navegación
    pub nav_label: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [Section],
}

/// Ficha del producto ZYZK-001
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductFacts {
    pub model: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub specs: &'static [(&'static str, &'static str)],
}

/// Paleta de la marca (variables CSS del shell)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

pub const THEME: Theme = Theme {
    primary: "#0F3460",
    secondary: "#16213E",
    accent: "#1A1A2E",
    light: "#F5F5F5",
    dark: "#333333",
};

impl Theme {
    /// Declaraciones `--color-*` para el atributo style del contenedor raíz
    pub fn css_variables(&self) -> String {
        format!(
            "--color-primary:{};--color-secondary:{};--color-accent:{};--color-light:{};--color-dark:{};",
            self.primary, self.secondary, self.accent, self.light, self.dark
        )
    }
}

const HOME: PageContent = PageContent {
    title: "首页",
    nav_label: "首页",
    tagline: "汇聚数据之星，守护创新价值",
    sections: &[
        Section {
            heading: "关于我们",
            body: "聚星空间站由钟元智库（数据知识产权）有限公司运营，专注于数据知识产权保护、数据资产登记与智能应用落地。",
        },
        Section {
            heading: "核心服务",
            body: "数据知识产权登记与确权、知识产权布局咨询、行业智能应用（IA）解决方案，以及自主研发的 ZYZK-001 数据资产管理终端。",
        },
        Section {
            heading: "我们的理念",
            body: "让每一份数据都有归属，让每一次创新都被尊重。",
        },
    ],
};

const INTELLECTUAL: PageContent = PageContent {
    title: "知识产权",
    nav_label: "知识产权",
    tagline: "数据知识产权全流程服务",
    sections: &[
        Section {
            heading: "数据知识产权登记",
            body: "协助企业梳理数据资源，完成数据知识产权登记申报，取得合法权属证明。",
        },
        Section {
            heading: "专利与软件著作权",
            body: "围绕核心算法与系统开展专利挖掘与申请，同步办理软件著作权登记。",
        },
        Section {
            heading: "侵权监测与维权",
            body: "持续监测数据与成果的使用情况，发现侵权后提供证据固定与维权支持。",
        },
    ],
};

const IA: PageContent = PageContent {
    title: "IA 智能应用",
    nav_label: "IA",
    tagline: "以智能应用释放数据价值",
    sections: &[
        Section {
            heading: "行业智能体",
            body: "面向政务、制造与金融场景，构建可落地的智能问答与辅助决策应用。",
        },
        Section {
            heading: "数据治理",
            body: "在合规前提下完成数据清洗、标注与分级分类，为模型训练提供高质量数据。",
        },
        Section {
            heading: "私有化部署",
            body: "支持本地化部署与权限隔离，数据不出域。",
        },
    ],
};

const ZYZK001: PageContent = PageContent {
    title: "ZYZK-001 产品详情",
    nav_label: "ZYZK-001",
    tagline: "数据资产管理终端",
    sections: &[
        Section {
            heading: "适用场景",
            body: "适用于需要对数据资产进行登记、存证与授权管理的企业与机构。",
        },
        Section {
            heading: "服务支持",
            body: "提供部署培训、年度维护与知识产权咨询配套服务。",
        },
    ],
};

const PRODUCT: ProductFacts = ProductFacts {
    model: "ZYZK-001",
    name: "钟元数据资产管理终端",
    summary: "一站式完成数据资产盘点、存证与授权追踪。",
    features: &[
        "数据资产自动盘点与分类",
        "登记材料一键生成",
        "可信时间戳存证",
        "授权使用记录追踪",
    ],
    specs: &[
        ("型号", "ZYZK-001"),
        ("部署方式", "私有化 / 云端"),
        ("存证方式", "可信时间戳"),
        ("适用规模", "中小型企业及机构"),
    ],
};

/// Contenido de una vista. `None` solo para handles fuera de la tabla.
pub fn page_content(view: ViewHandle) -> Option<&'static PageContent> {
    match view {
        ViewHandle::HOME => Some(&HOME),
        ViewHandle::INTELLECTUAL => Some(&INTELLECTUAL),
        ViewHandle::IA => Some(&IA),
        ViewHandle::ZYZK001 => Some(&ZYZK001),
        _ => None,
    }
}

pub fn product_facts() -> &'static ProductFacts {
    &PRODUCT
}
