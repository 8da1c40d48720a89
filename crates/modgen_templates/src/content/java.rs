//! Java sources placed under the derived namespace.

use crate::catalog::RenderContext;
use crate::manifest::ENTRYPOINT_CLASS;

/// Escape text for use inside a Java string literal.
fn java_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The client entry point, `CBClient.java`.
pub struct EntryPoint<'a> {
    pub package: &'a str,
    pub module_id: &'a str,
    pub display_name: &'a str,
}

impl<'a> EntryPoint<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            package: ctx.metadata.derived_namespace(),
            module_id: ctx.metadata.module_id(),
            display_name: ctx.metadata.display_name(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"package {pkg};

import {pkg}.gui.ClientScreen;
import {pkg}.module.ModuleManager;
import net.fabricmc.api.ClientModInitializer;
import net.fabricmc.fabric.api.client.event.lifecycle.v1.ClientTickEvents;
import net.fabricmc.fabric.api.client.keybinding.v1.KeyBindingHelper;
import net.minecraft.client.option.KeyBinding;
import net.minecraft.client.util.InputUtil;
import net.minecraft.text.Text;
import org.lwjgl.glfw.GLFW;
import org.slf4j.Logger;
import org.slf4j.LoggerFactory;

public class {class} implements ClientModInitializer {{
    public static final String MOD_ID = "{mod_id}";
    public static final String CLIENT_NAME = "{name}";
    public static final Logger LOGGER = LoggerFactory.getLogger(MOD_ID);

    private static KeyBinding openGuiKey;

    @Override
    public void onInitializeClient() {{
        LOGGER.info("[{{}}] init", CLIENT_NAME);
        ModuleManager.init();

        openGuiKey = KeyBindingHelper.registerKeyBinding(new KeyBinding(
            "key.{mod_id}.open_gui",
            InputUtil.Type.KEYSYM,
            GLFW.GLFW_KEY_RIGHT_SHIFT,
            "category.{mod_id}"
        ));

        ClientTickEvents.END_CLIENT_TICK.register(client -> {{
            while (openGuiKey.wasPressed()) {{
                if (client.currentScreen == null) {{
                    client.setScreen(new ClientScreen(Text.of(CLIENT_NAME)));
                }}
            }}
        }});
    }}
}}
"#,
            pkg = self.package,
            class = ENTRYPOINT_CLASS,
            mod_id = self.module_id,
            name = java_string(self.display_name),
        )
    }
}

/// Sources that only need the package name.
pub struct PackageSource<'a> {
    pub package: &'a str,
}

impl<'a> PackageSource<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            package: ctx.metadata.derived_namespace(),
        }
    }

    /// `module/Module.java`
    pub fn module(&self) -> String {
        format!(
            r#"package {pkg}.module;

public abstract class Module {{
    private final String name;
    private boolean enabled;

    public Module(String name) {{
        this.name = name;
    }}

    public String getName() {{
        return name;
    }}

    public boolean isEnabled() {{
        return enabled;
    }}

    public void setEnabled(boolean enabled) {{
        if (this.enabled == enabled) {{
            return;
        }}
        this.enabled = enabled;
        if (enabled) {{
            onEnable();
        }} else {{
            onDisable();
        }}
    }}

    public void toggle() {{
        setEnabled(!enabled);
    }}

    protected void onEnable() {{}}

    protected void onDisable() {{}}
}}
"#,
            pkg = self.package,
        )
    }

    /// `module/ModuleManager.java`
    pub fn module_manager(&self) -> String {
        format!(
            r#"package {pkg}.module;

import java.util.ArrayList;
import java.util.Collections;
import java.util.List;

public final class ModuleManager {{
    private static final List<Module> MODULES = new ArrayList<>();

    private ModuleManager() {{}}

    public static void init() {{
        MODULES.add(new ExampleModule());
    }}

    public static List<Module> all() {{
        return Collections.unmodifiableList(MODULES);
    }}
}}
"#,
            pkg = self.package,
        )
    }

    /// `module/ExampleModule.java`
    pub fn example_module(&self) -> String {
        format!(
            r#"package {pkg}.module;

import {pkg}.{class};

public class ExampleModule extends Module {{
    public ExampleModule() {{
        super("Example");
    }}

    @Override
    protected void onEnable() {{
        {class}.LOGGER.info("Example ON");
    }}

    @Override
    protected void onDisable() {{
        {class}.LOGGER.info("Example OFF");
    }}
}}
"#,
            pkg = self.package,
            class = ENTRYPOINT_CLASS,
        )
    }

    /// `gui/ClientScreen.java`
    pub fn client_screen(&self) -> String {
        format!(
            r#"package {pkg}.gui;

import {pkg}.module.Module;
import {pkg}.module.ModuleManager;
import net.minecraft.client.gui.screen.Screen;
import net.minecraft.client.gui.widget.ButtonWidget;
import net.minecraft.text.Text;

public class ClientScreen extends Screen {{
    public ClientScreen(Text title) {{
        super(title);
    }}

    @Override
    protected void init() {{
        int x = this.width / 2 - 100;
        int y = 40;
        for (Module module : ModuleManager.all()) {{
            ButtonWidget button = ButtonWidget.builder(labelFor(module), b -> {{
                module.toggle();
                b.setMessage(labelFor(module));
            }}).dimensions(x, y, 200, 20).build();
            this.addDrawableChild(button);
            y += 24;
        }}
        this.addDrawableChild(ButtonWidget.builder(Text.of("Close"), b -> this.close())
            .dimensions(x, y + 10, 200, 20)
            .build());
    }}

    private Text labelFor(Module module) {{
        return Text.of(module.getName() + " : " + (module.isEnabled() ? "ON" : "OFF"));
    }}
}}
"#,
            pkg = self.package,
        )
    }
}

/// `mixin/MinecraftClientMixin.java`
pub struct ClientMixin<'a> {
    pub package: &'a str,
    pub minecraft_version: &'a str,
}

impl<'a> ClientMixin<'a> {
    pub fn from_context(ctx: &RenderContext<'a>) -> Self {
        Self {
            package: ctx.metadata.derived_namespace(),
            minecraft_version: &ctx.versions.minecraft_version,
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"package {pkg}.mixin;

import {pkg}.{class};
import net.minecraft.client.MinecraftClient;
import org.spongepowered.asm.mixin.Mixin;
import org.spongepowered.asm.mixin.injection.At;
import org.spongepowered.asm.mixin.injection.Inject;
import org.spongepowered.asm.mixin.injection.callback.CallbackInfoReturnable;

@Mixin(MinecraftClient.class)
public class MinecraftClientMixin {{
    @Inject(method = "getWindowTitle", at = @At("HEAD"), cancellable = true)
    private void modgen$windowTitle(CallbackInfoReturnable<String> cir) {{
        cir.setReturnValue({class}.CLIENT_NAME + " | {minecraft}");
    }}
}}
"#,
            pkg = self.package,
            class = ENTRYPOINT_CLASS,
            minecraft = java_string(self.minecraft_version),
        )
    }
}
