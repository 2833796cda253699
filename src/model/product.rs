//! Static merchandise catalog shown in the store dialog

/// A single merchandise entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    /// Display price, already formatted
    pub price: &'static str,
    pub description: &'static str,
    /// Remote photo URL
    pub image: &'static str,
}

/// The six products offered by the store, in display order
pub const CATALOG: [Product; 6] = [
    Product {
        id: 1,
        name: "Polos Piqué Oficiales",
        price: "S/. 45.00",
        description: "Algodón piqué de alta calidad. Disponibles en color rojo y azul con escudo bordado.",
        image: "https://images.unsplash.com/photo-1576566588028-4147f3842f27?q=80&w=500&auto=format&fit=crop",
    },
    Product {
        id: 2,
        name: "Gorra Garibaldi 6",
        price: "S/. 35.00",
        description: "Gorra azul con visera roja, costuras reforzadas y escudo oficial bordado en el frente.",
        image: "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?q=80&w=500&auto=format&fit=crop",
    },
    Product {
        id: 3,
        name: "Polera Hoodie",
        price: "S/. 85.00",
        description: "Polera azul noche con capucha, bolsillo canguro y cordones ajustables. Ideal para el invierno.",
        image: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?q=80&w=500&auto=format&fit=crop",
    },
    Product {
        id: 4,
        name: "Tomatodos Colección",
        price: "S/. 25.00",
        description: "Botellas de aluminio acabado matte con arnés de transporte. Colores: Verde, Negro y Gris.",
        image: "https://images.unsplash.com/photo-1602143407151-011141951516?q=80&w=500&auto=format&fit=crop",
    },
    Product {
        id: 5,
        name: "Taza Oficial 2025",
        price: "S/. 20.00",
        description: "Taza de cerámica negra con diseño \"Bomberos Garibaldi 6\". Resistente y elegante.",
        image: "https://images.unsplash.com/photo-1514228742587-6b1558fcca3d?q=80&w=500&auto=format&fit=crop",
    },
    Product {
        id: 6,
        name: "Llavero de Goma",
        price: "S/. 10.00",
        description: "Llavero flexible con diseño de Cruz de Malta. El detalle perfecto para llevar a todos lados.",
        image: "https://images.unsplash.com/photo-1612368098048-c920f78c8574?q=80&w=500&auto=format&fit=crop",
    },
];
